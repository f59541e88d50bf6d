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
use std::f64::consts::PI;

pub const ANGLE: Dimension = Dimension::new("angle");

root_unit!(Radian, "rad", ANGLE);
base_unit!(Degree, "deg", Radian, PI / 180.0, [Revolution => 1.0 / 360.0]);
base_unit!(ArcMinute, "arcmin", Degree, 1.0 / 60.0);
base_unit!(ArcSecond, "arcsec", ArcMinute, 1.0 / 60.0);
base_unit!(Revolution, "rev", Radian, 2.0 * PI);

#[macro_export]
macro_rules! radians {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Radian>::from(&$num)
    };
}

#[macro_export]
macro_rules! radians_per_second {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Quot<$crate::Radian, $crate::Second>>::from(&$num)
    };
}

#[macro_export]
macro_rules! degrees {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Degree>::from(&$num)
    };
}

#[macro_export]
macro_rules! degrees_per_second {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Quot<$crate::Degree, $crate::Second>>::from(&$num)
    };
}

#[macro_export]
macro_rules! arcminutes {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::ArcMinute>::from(&$num)
    };
}

#[macro_export]
macro_rules! arcseconds {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::ArcSecond>::from(&$num)
    };
}

#[macro_export]
macro_rules! revolutions {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Revolution>::from(&$num)
    };
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_degrees_radians() {
        assert_relative_eq!(radians!(degrees!(180)).value(), PI, max_relative = 1e-12);
        assert_relative_eq!(degrees!(radians!(PI / 2.0)).value(), 90.0, max_relative = 1e-12);
    }

    #[test]
    fn test_sub_degree() {
        assert_relative_eq!(arcminutes!(degrees!(1)).value(), 60.0, max_relative = 1e-12);
        assert_relative_eq!(arcseconds!(degrees!(1)).value(), 3_600.0, max_relative = 1e-12);
    }

    #[test]
    fn test_revolutions() {
        assert_relative_eq!(degrees!(revolutions!(2)).value(), 720.0, max_relative = 1e-12);
        assert_relative_eq!(revolutions!(degrees!(90)).value(), 0.25, max_relative = 1e-12);
        assert_relative_eq!(radians!(revolutions!(1)).value(), 2.0 * PI, max_relative = 1e-12);
    }

    #[test]
    fn test_angular_velocity() {
        let w = radians_per_second!(degrees_per_second!(360));
        assert_relative_eq!(w.value(), 2.0 * PI, max_relative = 1e-12);
    }
}
