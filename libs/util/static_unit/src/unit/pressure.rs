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
use crate::{derived_unit, Meter, Newton};

derived_unit!(Pascal, "Pa", [Newton, (Meter, -2)]);

#[macro_export]
macro_rules! pascals {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Pascal>::from(&$num)
    };
}

#[macro_export]
macro_rules! psf {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Quot<$crate::PoundForce, $crate::Pow<$crate::Foot, 2>>>::from(
            &$num,
        )
    };
}

#[cfg(test)]
mod test {
    use crate::{meters2, newtons, Pascal, Quantity};
    use approx::assert_relative_eq;

    #[test]
    fn test_pressure_from_force() {
        let p: Quantity<f64, Pascal> = (newtons!(50) / meters2!(2)).into_unit();
        assert_eq!(p, pascals!(25));
    }

    #[test]
    fn test_psf_to_pascals() {
        let sea_level = psf!(2_116.22);
        assert_relative_eq!(pascals!(sea_level).value(), 101_325.0, max_relative = 1e-4);
    }
}
