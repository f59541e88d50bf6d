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
    config::{MAX_HIERARCHY_DEPTH, MAX_NEWTON_ITERATIONS},
    merge::{flatten, fold, inverse, Merged, Strategy},
    BaseUnit, Factor, UnitError, UnitExpr,
};

const fn powi(base: f64, n: i64) -> f64 {
    let (b, mut n) = if n < 0 { (1.0 / base, -n) } else { (base, n) };
    let mut acc = 1.0;
    while n > 0 {
        acc *= b;
        n -= 1;
    }
    acc
}

/// The smallest power of two known to be at or above `target^(1/den)`, read
/// off the binary exponent of a positive, finite `target`.
const fn root_seed(target: f64, den: i64) -> f64 {
    let exponent = ((target.to_bits() >> 52) & 0x7ff) as i64 - 1023;
    let seed = exponent.div_euclid(den) + 1;
    f64::from_bits(((seed + 1023) as u64) << 52)
}

/// `base^(num/den)`, usable in const context.
///
/// Integer powers multiply out directly. Fractional powers solve
/// `x^den = base^num` by Newton iteration. The seed sits above the root and
/// within a factor of two of it, so the sequence falls monotonically; it stops
/// as soon as a step no longer falls.
pub const fn pow_ratio(base: f64, num: i64, den: i64) -> f64 {
    let target = powi(base, num);
    if den == 1 || target <= 0.0 || !target.is_finite() {
        return target;
    }
    let mut x = root_seed(target, den);
    let mut i = 0;
    while i < MAX_NEWTON_ITERATIONS {
        let next = x + (target / powi(x, den - 1) - x) / den as f64;
        if next >= x {
            break;
        }
        x = next;
        i += 1;
    }
    x
}

/// Amount of the root unit in one `unit`, and that root.
const fn root_path(unit: &'static BaseUnit) -> Result<(f64, &'static BaseUnit), UnitError> {
    let mut factor = 1.0;
    let mut current = unit;
    let mut depth = 0;
    while let Some(parent) = current.parent() {
        if depth == MAX_HIERARCHY_DEPTH {
            return Err(UnitError::HierarchyTooDeep(unit.symbol()));
        }
        factor *= current.to_parent();
        current = parent;
        depth += 1;
    }
    Ok((factor, current))
}

/// The scalar `k` with `value_in_to = value_in_from * k` for two powers of base
/// units of one dimension.
///
/// A custom conversion registered on either unit wins over the parent chains.
pub const fn base_unit_conversion(from: Factor, to: Factor) -> Result<f64, UnitError> {
    let (f, t) = match (from.as_base_unit(), to.as_base_unit()) {
        (Some(f), Some(t)) => (f, t),
        (None, _) => return Err(UnitError::NotBaseUnit(from.symbol())),
        (_, None) => return Err(UnitError::NotBaseUnit(to.symbol())),
    };
    if !f.dimension().same(&t.dimension()) {
        return Err(UnitError::DimensionMismatch {
            from: f.symbol(),
            to: t.symbol(),
        });
    }
    let exponent = from.exponent();
    if !exponent.same(to.exponent()) {
        return Err(UnitError::ExponentMismatch {
            from: f.symbol(),
            to: t.symbol(),
        });
    }

    let raw = if f.same(t) {
        1.0
    } else if let Some(k) = f.custom_conversion(t) {
        k
    } else if let Some(k) = t.custom_conversion(f) {
        1.0 / k
    } else {
        let (pf, rf) = match root_path(f) {
            Ok(p) => p,
            Err(e) => return Err(e),
        };
        let (pt, rt) = match root_path(t) {
            Ok(p) => p,
            Err(e) => return Err(e),
        };
        if !rf.same(rt) {
            return Err(UnitError::NoCommonRoot {
                from: f.symbol(),
                to: t.symbol(),
            });
        }
        pf / pt
    };
    Ok(pow_ratio(raw, exponent.num(), exponent.den()))
}

/// Fold `a / b` down to base units, merging units of one dimension. What is left
/// over could not be cancelled; the factor is the accumulated scale.
pub const fn simplify(a: UnitExpr, b: UnitExpr) -> Result<Merged, UnitError> {
    let a = match flatten(a) {
        Ok(a) => a,
        Err(e) => return Err(e),
    };
    let b = match flatten(b) {
        Ok(b) => b,
        Err(e) => return Err(e),
    };
    let acc = match fold(
        Merged::new(UnitExpr::DIMENSIONLESS),
        a.factors(),
        Strategy::SameDimension,
    ) {
        Ok(acc) => acc,
        Err(e) => return Err(e),
    };
    fold(acc, inverse(b).factors(), Strategy::SameDimension)
}

pub const fn is_convertible(a: UnitExpr, b: UnitExpr) -> bool {
    match simplify(a, b) {
        Ok(m) => m.expr().is_dimensionless(),
        Err(_) => false,
    }
}

/// The scalar `k` with `value_in_b = value_in_a * k`.
pub const fn conversion_factor(a: UnitExpr, b: UnitExpr) -> Result<f64, UnitError> {
    match simplify(a, b) {
        Ok(m) if m.expr().is_dimensionless() => Ok(m.factor()),
        Ok(m) => Err(UnitError::Inconvertible {
            residue: m.expr().get(0),
        }),
        Err(e) => Err(e),
    }
}

impl UnitExpr {
    pub const fn is_convertible(&self, to: &UnitExpr) -> bool {
        is_convertible(*self, *to)
    }

    pub const fn conversion_factor(&self, to: &UnitExpr) -> Result<f64, UnitError> {
        conversion_factor(*self, *to)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        ArcSecond, Centimeter, Decagram, Degree, Descriptor, Dimension, Foot, Inch, Joule,
        Kilogram, Kilometer, Meter, Mile, Millimeter, Minute, Named, Newton, PoundForce, Radian,
        Kelvin, Rankine, Rational, Revolution, Second, Unit,
    };
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn k(a: UnitExpr, b: UnitExpr) -> f64 {
        conversion_factor(a, b).unwrap()
    }

    #[test]
    fn test_pow_ratio() {
        assert_eq!(pow_ratio(3.0, 2, 1), 9.0);
        assert_eq!(pow_ratio(2.0, -1, 1), 0.5);
        assert_eq!(pow_ratio(5.0, 0, 1), 1.0);
        assert_relative_eq!(pow_ratio(8.0, 1, 3), 2.0, max_relative = 1e-12);
        assert_relative_eq!(pow_ratio(1000.0, 2, 3), 100.0, max_relative = 1e-12);
        assert_relative_eq!(pow_ratio(0.001, 1, 3), 0.1, max_relative = 1e-12);
        assert_relative_eq!(pow_ratio(16.0, -1, 2), 0.25, max_relative = 1e-12);
    }

    #[test]
    fn test_pow_ratio_extremes() {
        assert_relative_eq!(pow_ratio(1e300, 1, 3), 1e100, max_relative = 1e-12);
        assert_relative_eq!(pow_ratio(1e-300, 1, 3), 1e-100, max_relative = 1e-12);
        assert_relative_eq!(pow_ratio(1e300, -1, 2), 1e-150, max_relative = 1e-12);
        assert_relative_eq!(pow_ratio(1e150, 2, 5), 1e60, max_relative = 1e-12);
        assert_eq!(pow_ratio(0.0, 1, 2), 0.0);
    }

    #[test]
    fn test_pow_ratio_in_const() {
        const ROOT2: f64 = pow_ratio(2.0, 1, 2);
        assert_relative_eq!(ROOT2, 2f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_parent_chain() {
        assert_relative_eq!(k(Meter::UNIT, Millimeter::UNIT), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(k(Millimeter::UNIT, Meter::UNIT), 0.001, max_relative = 1e-12);
        assert_relative_eq!(k(Foot::UNIT, Meter::UNIT), 0.3048, max_relative = 1e-12);
        assert_relative_eq!(k(Inch::UNIT, Centimeter::UNIT), 2.54, max_relative = 1e-12);
        assert_relative_eq!(k(Mile::UNIT, Kilometer::UNIT), 1.609344, max_relative = 1e-12);
        assert_relative_eq!(k(Kelvin::UNIT, Rankine::UNIT), 1.8, max_relative = 1e-12);
    }

    #[test]
    fn test_custom_conversion_both_ways() {
        assert_relative_eq!(k(Degree::UNIT, Revolution::UNIT), 1.0 / 360.0, max_relative = 1e-12);
        assert_relative_eq!(k(Revolution::UNIT, Degree::UNIT), 360.0, max_relative = 1e-12);
        assert_relative_eq!(k(Degree::UNIT, Radian::UNIT), PI / 180.0, max_relative = 1e-12);
        assert_relative_eq!(
            k(ArcSecond::UNIT, Radian::UNIT),
            PI / 180.0 / 3600.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_powers_convert() {
        let m2 = Meter::UNIT.pow(Rational::integer(2));
        let mm2 = Millimeter::UNIT.pow(Rational::integer(2));
        assert_relative_eq!(k(m2, mm2), 1_000_000.0, max_relative = 1e-12);
        let root_m = Meter::UNIT.pow(Rational::new(1, 2));
        let root_mm = Millimeter::UNIT.pow(Rational::new(1, 2));
        assert_relative_eq!(k(root_m, root_mm), 1000f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_derived_conversion() {
        assert_relative_eq!(
            k(PoundForce::UNIT, Newton::UNIT),
            32.174049 * 0.45359237 * 0.3048,
            max_relative = 1e-12
        );
        let mixed = Meter::UNIT
            .multiply(Kilogram::UNIT)
            .unwrap()
            .divide(Second::UNIT.pow(Rational::integer(2)))
            .unwrap();
        assert_relative_eq!(k(Newton::UNIT, mixed), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_same_dimension_within_one_side() {
        let m_mm = Meter::UNIT.multiply(Millimeter::UNIT).unwrap();
        let m2 = Meter::UNIT.pow(Rational::integer(2));
        assert_relative_eq!(k(m_mm, m2), 0.001, max_relative = 1e-12);
    }

    #[test]
    fn test_inconvertible() {
        let odd = Centimeter::UNIT
            .multiply(Decagram::UNIT)
            .unwrap()
            .divide(Minute::UNIT.pow(Rational::integer(2)))
            .unwrap();
        assert!(!is_convertible(Joule::UNIT, odd));
        assert!(matches!(
            conversion_factor(Joule::UNIT, odd),
            Err(UnitError::Inconvertible { .. })
        ));
        assert!(!Meter::UNIT.is_convertible(&Second::UNIT));
    }

    #[test]
    fn test_base_conversion_errors() {
        let m = Factor::new(Meter::DESCRIPTOR, Rational::ONE);
        let m2 = Factor::new(Meter::DESCRIPTOR, Rational::integer(2));
        let s = Factor::new(Second::DESCRIPTOR, Rational::ONE);
        let n = Factor::new(Newton::DESCRIPTOR, Rational::ONE);
        assert_eq!(
            base_unit_conversion(m, s),
            Err(UnitError::DimensionMismatch { from: "m", to: "s" })
        );
        assert_eq!(
            base_unit_conversion(m, m2),
            Err(UnitError::ExponentMismatch { from: "m", to: "m" })
        );
        assert_eq!(base_unit_conversion(n, m), Err(UnitError::NotBaseUnit("N")));
    }

    static ORPHAN_A: BaseUnit = BaseUnit::root("orphan_a", Dimension::new("orphan"));
    static ORPHAN_B: BaseUnit = BaseUnit::root("orphan_b", Dimension::new("orphan"));

    #[test]
    fn test_no_common_root() {
        let a = Factor::new(Descriptor::Base(&ORPHAN_A), Rational::ONE);
        let b = Factor::new(Descriptor::Base(&ORPHAN_B), Rational::ONE);
        assert_eq!(
            base_unit_conversion(a, b),
            Err(UnitError::NoCommonRoot {
                from: "orphan_a",
                to: "orphan_b"
            })
        );
        assert!(!is_convertible(UnitExpr::from_factor(a), UnitExpr::from_factor(b)));
    }
}
