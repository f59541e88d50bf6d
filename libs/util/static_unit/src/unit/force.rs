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
use crate::{derived_unit, Centimeter, Foot, Gram, Kilogram, Meter, Second, Slug};

derived_unit!(Newton, "N", [Kilogram, Meter, (Second, -2)]);
derived_unit!(PoundForce, "lbf", [Slug, Foot, (Second, -2)]);
derived_unit!(Dyne, "dyn", [Gram, Centimeter, (Second, -2)]);

#[macro_export]
macro_rules! newtons {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Newton>::from(&$num)
    };
}

#[macro_export]
macro_rules! pounds_force {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::PoundForce>::from(&$num)
    };
}

#[macro_export]
macro_rules! dynes {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Dyne>::from(&$num)
    };
}
