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

pub const TIME: Dimension = Dimension::new("time");

root_unit!(Second, "s", TIME);
base_unit!(Millisecond, "ms", Second, 0.001);
base_unit!(Minute, "min", Second, 60.0);
base_unit!(Hour, "h", Minute, 60.0);
base_unit!(Day, "d", Hour, 24.0);

#[macro_export]
macro_rules! seconds {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Second>::from(&$num)
    };
}

#[macro_export]
macro_rules! milliseconds {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Millisecond>::from(&$num)
    };
}

#[macro_export]
macro_rules! minutes {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Minute>::from(&$num)
    };
}

#[macro_export]
macro_rules! hours {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Hour>::from(&$num)
    };
}

#[macro_export]
macro_rules! days {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Day>::from(&$num)
    };
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    #[test]
    fn test_time_chain() {
        assert_relative_eq!(seconds!(days!(1)).value(), 86_400.0, max_relative = 1e-12);
        assert_relative_eq!(hours!(minutes!(90)).value(), 1.5, max_relative = 1e-12);
        assert_relative_eq!(milliseconds!(seconds!(2)).value(), 2_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_time_display() {
        assert_eq!(hours!(2).to_string(), "2 h");
        assert_eq!(format!("{:.1}", minutes!(hours!(0.5))), "30.0 min");
    }
}
