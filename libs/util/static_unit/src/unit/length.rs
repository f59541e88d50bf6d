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

pub const LENGTH: Dimension = Dimension::new("length");

root_unit!(Meter, "m", LENGTH);
base_unit!(Decimeter, "dm", Meter, 0.1);
base_unit!(Centimeter, "cm", Meter, 0.01);
base_unit!(Millimeter, "mm", Meter, 0.001);
base_unit!(Decameter, "dam", Meter, 10.0);
base_unit!(Hectometer, "hm", Meter, 100.0);
base_unit!(Kilometer, "km", Meter, 1_000.0);
base_unit!(NauticalMile, "nmi", Meter, 1_852.0);

// Imperial lengths hang off the international foot.
base_unit!(Foot, "ft", Meter, 0.3048);
base_unit!(Inch, "in", Foot, 1.0 / 12.0);
base_unit!(Yard, "yd", Foot, 3.0);
base_unit!(Mile, "mi", Foot, 5_280.0);

#[macro_export]
macro_rules! meters {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Meter>::from(&$num)
    };
}

#[macro_export]
macro_rules! meters2 {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Pow<$crate::Meter, 2>>::from(&$num)
    };
}

#[macro_export]
macro_rules! meters3 {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Pow<$crate::Meter, 3>>::from(&$num)
    };
}

#[macro_export]
macro_rules! meters_per_second {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Quot<$crate::Meter, $crate::Second>>::from(&$num)
    };
}

#[macro_export]
macro_rules! meters_per_second2 {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Quot<$crate::Meter, $crate::Pow<$crate::Second, 2>>>::from(
            &$num,
        )
    };
}

#[macro_export]
macro_rules! decimeters {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Decimeter>::from(&$num)
    };
}

#[macro_export]
macro_rules! centimeters {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Centimeter>::from(&$num)
    };
}

#[macro_export]
macro_rules! millimeters {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Millimeter>::from(&$num)
    };
}

#[macro_export]
macro_rules! decameters {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Decameter>::from(&$num)
    };
}

#[macro_export]
macro_rules! hectometers {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Hectometer>::from(&$num)
    };
}

#[macro_export]
macro_rules! kilometers {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Kilometer>::from(&$num)
    };
}

#[macro_export]
macro_rules! nautical_miles {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::NauticalMile>::from(&$num)
    };
}

#[macro_export]
macro_rules! feet {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Foot>::from(&$num)
    };
}

#[macro_export]
macro_rules! feet2 {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Pow<$crate::Foot, 2>>::from(&$num)
    };
}

#[macro_export]
macro_rules! feet_per_second {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Quot<$crate::Foot, $crate::Second>>::from(&$num)
    };
}

#[macro_export]
macro_rules! inches {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Inch>::from(&$num)
    };
}

#[macro_export]
macro_rules! yards {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Yard>::from(&$num)
    };
}

#[macro_export]
macro_rules! miles {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Mile>::from(&$num)
    };
}

#[cfg(test)]
mod test {
    use crate::{Meter, Quantity};
    use approx::assert_relative_eq;

    #[test]
    fn test_meters_to_feet() {
        let m = meters!(1);
        assert_relative_eq!(feet!(m).value(), 3.280_839_895_013_123, max_relative = 1e-12);
        assert_relative_eq!(meters!(feet!(1)).value(), 0.3048, max_relative = 1e-12);
    }

    #[test]
    fn test_metric_ladder() {
        assert_relative_eq!(millimeters!(meters!(1)).value(), 1_000.0, max_relative = 1e-12);
        assert_relative_eq!(centimeters!(millimeters!(25)).value(), 2.5, max_relative = 1e-12);
        assert_relative_eq!(kilometers!(hectometers!(15)).value(), 1.5, max_relative = 1e-12);
    }

    #[test]
    fn test_imperial_ladder() {
        assert_relative_eq!(inches!(yards!(1)).value(), 36.0, max_relative = 1e-12);
        assert_relative_eq!(meters!(miles!(1)).value(), 1_609.344, max_relative = 1e-12);
        assert_relative_eq!(centimeters!(inches!(1)).value(), 2.54, max_relative = 1e-12);
        assert_relative_eq!(meters!(nautical_miles!(1)).value(), 1_852.0, max_relative = 1e-12);
    }

    #[test]
    fn test_area_conversion() {
        let sq_ft = feet2!(meters2!(1));
        assert_relative_eq!(sq_ft.value(), 10.763_910_416_709_722, max_relative = 1e-12);
    }

    #[test]
    fn test_speed() {
        let v = meters_per_second!(12);
        let d: Quantity<f64, Meter> = (v * crate::seconds!(10)).into_unit();
        assert_eq!(d, meters!(120));
    }
}
