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
use crate::{Factor, UnitError, UnitExpr};
use std::fmt;

/// Byte-wise string equality for const contexts.
pub(crate) const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Names the physical quantity family a base unit belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Dimension {
    name: &'static str,
}

impl Dimension {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn same(&self, other: &Dimension) -> bool {
        str_eq(self.name, other.name)
    }
}

/// A direct scalar conversion from the unit that lists it to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CustomConversion {
    to: &'static BaseUnit,
    factor: f64,
}

impl CustomConversion {
    pub const fn new(to: &'static BaseUnit, factor: f64) -> Self {
        Self { to, factor }
    }

    pub const fn to(&self) -> &'static BaseUnit {
        self.to
    }

    pub const fn factor(&self) -> f64 {
        self.factor
    }
}

/// A primitive unit of one dimension.
///
/// Base units of a dimension form a tree through their parent links; the
/// parentless root anchors every conversion within the dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseUnit {
    symbol: &'static str,
    dimension: Dimension,
    parent: Option<&'static BaseUnit>,
    to_parent: f64,
    conversions: &'static [CustomConversion],
}

impl BaseUnit {
    pub const fn root(symbol: &'static str, dimension: Dimension) -> Self {
        Self {
            symbol,
            dimension,
            parent: None,
            to_parent: 1.0,
            conversions: &[],
        }
    }

    /// One of this unit is `to_parent` of `parent`.
    pub const fn child(symbol: &'static str, parent: &'static BaseUnit, to_parent: f64) -> Self {
        Self {
            symbol,
            dimension: parent.dimension,
            parent: Some(parent),
            to_parent,
            conversions: &[],
        }
    }

    pub const fn with_conversions(mut self, conversions: &'static [CustomConversion]) -> Self {
        self.conversions = conversions;
        self
    }

    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub const fn parent(&self) -> Option<&'static BaseUnit> {
        self.parent
    }

    pub const fn to_parent(&self) -> f64 {
        self.to_parent
    }

    pub const fn conversions(&self) -> &'static [CustomConversion] {
        self.conversions
    }

    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Identity of the tag: symbol and dimension. Two declarations with the
    /// same symbol in one dimension are rejected by catalog validation.
    pub const fn same(&self, other: &BaseUnit) -> bool {
        str_eq(self.symbol, other.symbol) && self.dimension.same(&other.dimension)
    }

    /// The registered direct conversion to `to`, if any.
    pub const fn custom_conversion(&self, to: &BaseUnit) -> Option<f64> {
        let mut i = 0;
        while i < self.conversions.len() {
            if self.conversions[i].to.same(to) {
                return Some(self.conversions[i].factor);
            }
            i += 1;
        }
        None
    }
}

/// A named product of other units, e.g. newton = kg m s^-2.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedUnit {
    symbol: &'static str,
    definition: &'static [Factor],
}

impl DerivedUnit {
    pub const fn new(symbol: &'static str, definition: &'static [Factor]) -> Self {
        Self { symbol, definition }
    }

    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub const fn definition(&self) -> &'static [Factor] {
        self.definition
    }

    /// Identity of the tag: symbol and the factors it is defined by.
    pub const fn same(&self, other: &DerivedUnit) -> bool {
        if !str_eq(self.symbol, other.symbol) {
            return false;
        }
        if self.definition.len() != other.definition.len() {
            return false;
        }
        let mut i = 0;
        while i < self.definition.len() {
            let (a, b) = (self.definition[i], other.definition[i]);
            if !a.descriptor().same(&b.descriptor()) || !a.exponent().same(b.exponent()) {
                return false;
            }
            i += 1;
        }
        true
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Base,
    Derived,
}

/// Anything that can stand as the base of a factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Descriptor {
    Base(&'static BaseUnit),
    Derived(&'static DerivedUnit),
}

impl Descriptor {
    pub const fn category(&self) -> Category {
        match self {
            Self::Base(_) => Category::Base,
            Self::Derived(_) => Category::Derived,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Base(b) => b.symbol,
            Self::Derived(d) => d.symbol,
        }
    }

    pub const fn dimension(&self) -> Option<Dimension> {
        match self {
            Self::Base(b) => Some(b.dimension),
            Self::Derived(_) => None,
        }
    }

    pub const fn as_base(&self) -> Option<&'static BaseUnit> {
        match self {
            Self::Base(b) => Some(*b),
            Self::Derived(_) => None,
        }
    }

    /// Tag identity. Never a conversion check: meter and millimeter differ.
    pub const fn same(&self, other: &Descriptor) -> bool {
        match (self, other) {
            (Self::Base(a), Self::Base(b)) => a.same(b),
            (Self::Derived(a), Self::Derived(b)) => a.same(b),
            _ => false,
        }
    }

    /// Expansion into base-unit factors only.
    pub const fn flat(&self) -> Result<UnitExpr, UnitError> {
        UnitExpr::from_descriptor(*self).flatten()
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::Unit;
    use crate::{
        derived_unit, Centimeter, Foot, Kilogram, Meter, Millimeter, Named, Newton, Second,
    };

    derived_unit!(ShadowNewton, "N", [Meter]);
    derived_unit!(TwinNewton, "N", [Kilogram, Meter, (Second, -2)]);

    #[test]
    fn test_child_inherits_dimension() {
        assert!(Millimeter::BASE
            .dimension()
            .same(&Meter::BASE.dimension()));
        assert!(!Second::BASE.dimension().same(&Meter::BASE.dimension()));
    }

    #[test]
    fn test_identity_is_not_conversion() {
        assert!(Meter::DESCRIPTOR.same(&Meter::DESCRIPTOR));
        assert!(!Meter::DESCRIPTOR.same(&Millimeter::DESCRIPTOR));
        assert!(!Meter::DESCRIPTOR.same(&Foot::DESCRIPTOR));
        assert!(!Newton::DESCRIPTOR.same(&Meter::DESCRIPTOR));
    }

    #[test]
    fn test_categories() {
        assert_eq!(Centimeter::DESCRIPTOR.category(), Category::Base);
        assert_eq!(Newton::DESCRIPTOR.category(), Category::Derived);
        assert!(Newton::DESCRIPTOR.dimension().is_none());
    }

    #[test]
    fn test_str_eq() {
        assert!(str_eq("kg", "kg"));
        assert!(!str_eq("kg", "k"));
        assert!(!str_eq("ft", "fm"));
    }

    #[test]
    fn test_derived_identity_includes_definition() {
        assert!(!ShadowNewton::DESCRIPTOR.same(&Newton::DESCRIPTOR));
        assert!(TwinNewton::DESCRIPTOR.same(&Newton::DESCRIPTOR));
        let shadowed = Newton::UNIT.multiply(ShadowNewton::UNIT).unwrap();
        assert_eq!(shadowed.len(), 2);
        let twinned = Newton::UNIT.multiply(TwinNewton::UNIT).unwrap();
        assert_eq!(twinned.to_string(), "N^2");
    }
}
