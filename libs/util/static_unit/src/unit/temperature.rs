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

// Absolute scales only. Celsius and Fahrenheit need an offset, which a
// multiplicative conversion cannot express.
pub const TEMPERATURE: Dimension = Dimension::new("temperature");

root_unit!(Kelvin, "K", TEMPERATURE);
base_unit!(Rankine, "°R", Kelvin, 5.0 / 9.0);

#[macro_export]
macro_rules! kelvin {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Kelvin>::from(&$num)
    };
}

#[macro_export]
macro_rules! rankine {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Rankine>::from(&$num)
    };
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    #[test]
    fn test_rankine_to_kelvin() {
        assert_relative_eq!(kelvin!(rankine!(518.67)).value(), 288.15, max_relative = 1e-12);
        assert_relative_eq!(rankine!(kelvin!(100)).value(), 180.0, max_relative = 1e-12);
        assert_eq!(rankine!(1).to_string(), "1 °R");
    }
}
