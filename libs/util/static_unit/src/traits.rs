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
use crate::{Category, Descriptor, Rational, UnitError, UnitExpr};
use std::{fmt::Debug, hash::Hash};

/// A type that stands for a unit expression.
///
/// Implementors are zero-sized markers: the expression lives entirely in the
/// associated const and is only ever inspected during compilation.
pub trait Unit: Copy + Debug + Default + Eq + Hash + Ord + 'static {
    const UNIT: UnitExpr;

    fn unit() -> UnitExpr {
        Self::UNIT
    }

    fn symbol() -> String {
        Self::UNIT.to_string()
    }

    fn category() -> Category {
        Self::UNIT.category()
    }

    fn exponent() -> Rational {
        Self::UNIT.exponent()
    }

    fn flat() -> Result<UnitExpr, UnitError> {
        Self::UNIT.flatten()
    }
}

/// A unit declared with a name and symbol of its own.
pub trait Named: Unit {
    const DESCRIPTOR: Descriptor;
}
