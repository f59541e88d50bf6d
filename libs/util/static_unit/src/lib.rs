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
pub mod config;
pub mod conversion;
pub mod equality;
pub mod merge;
#[doc(hidden)]
pub mod predicates;

pub(crate) mod catalog;
pub(crate) mod compose;
pub(crate) mod declare;
pub(crate) mod descriptor;
pub(crate) mod error;
pub(crate) mod expr;
pub(crate) mod generic;
pub(crate) mod math;
pub(crate) mod quantity;
pub(crate) mod rational;
pub(crate) mod traits;
pub(crate) mod unit;

pub use crate::{
    catalog::Catalog,
    compose::{Dimensionless, Pow, Prod, Quot},
    conversion::{base_unit_conversion, conversion_factor, is_convertible, pow_ratio, simplify},
    descriptor::{BaseUnit, Category, CustomConversion, DerivedUnit, Descriptor, Dimension},
    equality::{ensure_same, equals, is_same_base},
    error::{Malformation, UnitError},
    expr::{Factor, UnitExpr},
    merge::{Merged, Strategy},
    quantity::{quantity_cast, Quantity},
    rational::Rational,
    traits::{Named, Unit},
    unit::{
        angle::{ArcMinute, ArcSecond, Degree, Radian, Revolution, ANGLE},
        energy::Joule,
        force::{Dyne, Newton, PoundForce},
        length::{
            Centimeter, Decameter, Decimeter, Foot, Hectometer, Inch, Kilometer, Meter, Mile,
            Millimeter, NauticalMile, Yard, LENGTH,
        },
        mass::{Decagram, Gram, Kilogram, Milligram, Pound, Slug, MASS},
        power::Watt,
        pressure::Pascal,
        temperature::{Kelvin, Rankine, TEMPERATURE},
        time::{Day, Hour, Millisecond, Minute, Second, TIME},
    },
};

pub use ordered_float;
