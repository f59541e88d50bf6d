// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use crate::{
    config::MAX_FACTORS, BaseUnit, Category, Descriptor, Dimension, Malformation, Rational,
    UnitError,
};
use std::fmt;

/// A descriptor raised to a rational power: `m^2`, `s^-1`, `N`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Factor {
    descriptor: Descriptor,
    exponent: Rational,
}

impl Factor {
    pub const fn new(descriptor: Descriptor, exponent: Rational) -> Self {
        Self {
            descriptor,
            exponent,
        }
    }

    pub const fn descriptor(&self) -> Descriptor {
        self.descriptor
    }

    pub const fn exponent(&self) -> Rational {
        self.exponent
    }

    /// The same descriptor with unit exponent.
    pub const fn base(&self) -> Factor {
        self.with_exponent(Rational::ONE)
    }

    pub const fn with_exponent(&self, exponent: Rational) -> Factor {
        Factor {
            descriptor: self.descriptor,
            exponent,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        self.descriptor.symbol()
    }

    pub const fn category(&self) -> Category {
        self.descriptor.category()
    }

    pub const fn dimension(&self) -> Option<Dimension> {
        self.descriptor.dimension()
    }

    pub const fn as_base_unit(&self) -> Option<&'static BaseUnit> {
        self.descriptor.as_base()
    }

    pub const fn same_base(&self, other: &Factor) -> bool {
        self.descriptor.same(&other.descriptor)
    }

    /// Both factors are base units of one dimension.
    pub const fn same_dimension(&self, other: &Factor) -> bool {
        match (self.descriptor.dimension(), other.descriptor.dimension()) {
            (Some(a), Some(b)) => a.same(&b),
            _ => false,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())?;
        if self.exponent.is_one() {
            Ok(())
        } else if self.exponent.is_integer() {
            write!(f, "^{}", self.exponent)
        } else {
            write!(f, "^({})", self.exponent)
        }
    }
}

const VOID_BASE: BaseUnit = BaseUnit::root("", Dimension::new(""));
const VOID: Factor = Factor {
    descriptor: Descriptor::Base(&VOID_BASE),
    exponent: Rational::ZERO,
};

/// A unit expression: dimensionless, a single factor, or a mixed unit of two or
/// more factors with distinct bases.
///
/// Factor order carries no meaning. Only the multiset of bases and exponents
/// does, which is why equality goes through [`UnitExpr::equals`].
#[derive(Clone, Copy)]
pub struct UnitExpr {
    factors: [Factor; MAX_FACTORS],
    len: usize,
}

impl UnitExpr {
    pub const DIMENSIONLESS: UnitExpr = UnitExpr {
        factors: [VOID; MAX_FACTORS],
        len: 0,
    };

    pub const fn dimensionless() -> Self {
        Self::DIMENSIONLESS
    }

    pub const fn from_descriptor(descriptor: Descriptor) -> Self {
        Self::from_factor(Factor::new(descriptor, Rational::ONE))
    }

    /// A factor raised to zero collapses to dimensionless.
    pub const fn from_factor(factor: Factor) -> Self {
        let mut out = Self::DIMENSIONLESS;
        if !factor.exponent.is_zero() {
            out.factors[0] = factor;
            out.len = 1;
        }
        out
    }

    /// Assemble a mixed unit from already merged factors, enforcing its
    /// invariants.
    pub const fn mixed(factors: &[Factor]) -> Result<Self, UnitError> {
        if factors.len() < 2 {
            return Err(UnitError::MalformedMixedUnit(Malformation::TooFewFactors));
        }
        if factors.len() > MAX_FACTORS {
            return Err(UnitError::TooManyFactors);
        }
        let mut out = Self::DIMENSIONLESS;
        let mut i = 0;
        while i < factors.len() {
            let f = factors[i];
            if f.exponent.is_zero() {
                return Err(UnitError::MalformedMixedUnit(Malformation::ZeroExponent(
                    f.symbol(),
                )));
            }
            let mut j = 0;
            while j < i {
                if factors[j].same_base(&f) {
                    return Err(UnitError::MalformedMixedUnit(Malformation::DuplicateBase(
                        f.symbol(),
                    )));
                }
                j += 1;
            }
            out.factors[i] = f;
            i += 1;
        }
        out.len = factors.len();
        Ok(out)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.len == 0
    }

    pub const fn is_mixed(&self) -> bool {
        self.len > 1
    }

    pub const fn factors(&self) -> &[Factor] {
        self.factors.split_at(self.len).0
    }

    pub const fn single(&self) -> Option<Factor> {
        if self.len == 1 {
            Some(self.factors[0])
        } else {
            None
        }
    }

    /// Exponent of a single-factor unit. A mixed unit counts as raised to one,
    /// dimensionless as raised to zero.
    pub const fn exponent(&self) -> Rational {
        match self.single() {
            Some(f) => f.exponent,
            None if self.len == 0 => Rational::ZERO,
            None => Rational::ONE,
        }
    }

    /// The same unit with exponent one. Mixed units are their own base.
    pub const fn base(&self) -> UnitExpr {
        match self.single() {
            Some(f) => Self::from_factor(f.base()),
            None => *self,
        }
    }

    pub const fn category(&self) -> Category {
        match self.single() {
            Some(f) => f.category(),
            None => Category::Derived,
        }
    }

    pub(crate) const fn push(mut self, factor: Factor) -> Result<Self, UnitError> {
        if self.len == MAX_FACTORS {
            return Err(UnitError::TooManyFactors);
        }
        self.factors[self.len] = factor;
        self.len += 1;
        Ok(self)
    }

    pub(crate) const fn replace(mut self, index: usize, factor: Factor) -> Self {
        self.factors[index] = factor;
        self
    }

    pub(crate) const fn remove(mut self, index: usize) -> Self {
        let mut i = index;
        while i + 1 < self.len {
            self.factors[i] = self.factors[i + 1];
            i += 1;
        }
        self.len -= 1;
        self.factors[self.len] = VOID;
        self
    }

    pub(crate) const fn get(&self, index: usize) -> Factor {
        self.factors[index]
    }
}

impl Default for UnitExpr {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

impl fmt::Display for UnitExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, factor) in self.factors().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(factor, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for UnitExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UnitExpr({})", self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Kilogram, Meter, Named, Second};

    fn meter(num: i64, den: i64) -> Factor {
        Factor::new(Meter::DESCRIPTOR, Rational::new(num, den))
    }

    #[test]
    fn test_symbols() {
        assert_eq!(meter(1, 1).to_string(), "m");
        assert_eq!(meter(2, 1).to_string(), "m^2");
        assert_eq!(meter(-3, 1).to_string(), "m^-3");
        assert_eq!(meter(2, 3).to_string(), "m^(2/3)");
        assert_eq!(meter(-2, 3).to_string(), "m^(-2/3)");
    }

    #[test]
    fn test_mixed_symbol() {
        let u = UnitExpr::mixed(&[
            Factor::new(Kilogram::DESCRIPTOR, Rational::ONE),
            meter(1, 1),
            Factor::new(Second::DESCRIPTOR, Rational::integer(-2)),
        ])
        .unwrap();
        assert_eq!(u.to_string(), "kg m s^-2");
        assert!(u.is_mixed());
        assert_eq!(u.category(), Category::Derived);
    }

    #[test]
    fn test_mixed_rejects_duplicates() {
        assert_eq!(
            UnitExpr::mixed(&[meter(1, 1), meter(2, 1)]).unwrap_err(),
            UnitError::MalformedMixedUnit(Malformation::DuplicateBase("m"))
        );
    }

    #[test]
    fn test_mixed_rejects_zero_and_single() {
        let s = Factor::new(Second::DESCRIPTOR, Rational::ONE);
        assert_eq!(
            UnitExpr::mixed(&[s, meter(0, 1)]).unwrap_err(),
            UnitError::MalformedMixedUnit(Malformation::ZeroExponent("m"))
        );
        assert_eq!(
            UnitExpr::mixed(&[s]).unwrap_err(),
            UnitError::MalformedMixedUnit(Malformation::TooFewFactors)
        );
    }

    #[test]
    fn test_zero_exponent_is_dimensionless() {
        assert!(UnitExpr::from_factor(meter(0, 1)).is_dimensionless());
        assert_eq!(UnitExpr::DIMENSIONLESS.to_string(), "");
    }

    #[test]
    fn test_base_and_exponent() {
        let u = UnitExpr::from_factor(meter(2, 3));
        assert_eq!(u.exponent(), Rational::new(2, 3));
        assert_eq!(u.base().exponent(), Rational::ONE);
        assert_eq!(u.category(), Category::Base);
    }
}
