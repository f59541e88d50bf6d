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
use crate::{base_unit, root_unit, Dimension};

pub const MASS: Dimension = Dimension::new("mass");

root_unit!(Kilogram, "kg", MASS);
base_unit!(Gram, "g", Kilogram, 0.001);
base_unit!(Decagram, "dag", Kilogram, 0.01);
base_unit!(Milligram, "mg", Gram, 0.001);
base_unit!(Pound, "lb", Kilogram, 0.453_592_37);
base_unit!(Slug, "slug", Pound, 32.174_049);

#[macro_export]
macro_rules! kilograms {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Kilogram>::from(&$num)
    };
}

#[macro_export]
macro_rules! kilograms_per_meter3 {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Quot<$crate::Kilogram, $crate::Pow<$crate::Meter, 3>>>::from(
            &$num,
        )
    };
}

#[macro_export]
macro_rules! grams {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Gram>::from(&$num)
    };
}

#[macro_export]
macro_rules! decagrams {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Decagram>::from(&$num)
    };
}

#[macro_export]
macro_rules! milligrams {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Milligram>::from(&$num)
    };
}

#[macro_export]
macro_rules! pounds {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Pound>::from(&$num)
    };
}

#[macro_export]
macro_rules! slugs {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Slug>::from(&$num)
    };
}

#[macro_export]
macro_rules! slugs_per_foot3 {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Quot<$crate::Slug, $crate::Pow<$crate::Foot, 3>>>::from(
            &$num,
        )
    };
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    #[test]
    fn test_metric_mass() {
        assert_relative_eq!(grams!(kilograms!(2)).value(), 2_000.0, max_relative = 1e-12);
        assert_relative_eq!(decagrams!(grams!(50)).value(), 5.0, max_relative = 1e-12);
        assert_relative_eq!(kilograms!(milligrams!(1_500)).value(), 0.0015, max_relative = 1e-12);
    }

    #[test]
    fn test_imperial_mass() {
        assert_relative_eq!(kilograms!(pounds!(1)).value(), 0.453_592_37, max_relative = 1e-12);
        assert_relative_eq!(pounds!(slugs!(1)).value(), 32.174_049, max_relative = 1e-12);
        assert_relative_eq!(
            kilograms!(slugs!(1)).value(),
            14.593_903_138_406_128,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_density() {
        let sea_level = slugs_per_foot3!(0.002_376_89);
        let metric = kilograms_per_meter3!(sea_level);
        assert_relative_eq!(metric.value(), 1.224_999, max_relative = 1e-5);
    }
}
