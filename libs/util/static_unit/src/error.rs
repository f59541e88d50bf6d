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
use crate::Factor;
use thiserror::Error;

/// The ways a mixed unit can violate its construction invariants.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Malformation {
    #[error("base {0} appears more than once")]
    DuplicateBase(&'static str),

    #[error("factor {0} has a zero exponent")]
    ZeroExponent(&'static str),

    #[error("a mixed unit needs at least two factors")]
    TooFewFactors,
}

/// Every way the unit engine can reject an expression.
///
/// Quantity operators evaluate the engine in const context, where any of these
/// becomes a compile error at the offending expression. The same functions
/// return them as ordinary values when called at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum UnitError {
    #[error("units do not match: {residue} does not cancel")]
    UnitMismatch { residue: Factor },

    #[error("units are not convertible: {residue} is left over")]
    Inconvertible { residue: Factor },

    #[error("malformed mixed unit: {0}")]
    MalformedMixedUnit(Malformation),

    #[error("unit expression has more factors than the engine can hold")]
    TooManyFactors,

    #[error("{0} is not a base unit")]
    NotBaseUnit(&'static str),

    #[error("cannot convert {from} to {to}: different dimensions")]
    DimensionMismatch {
        from: &'static str,
        to: &'static str,
    },

    #[error("cannot convert {from} to {to}: different exponents")]
    ExponentMismatch {
        from: &'static str,
        to: &'static str,
    },

    #[error("{from} and {to} do not share a root unit")]
    NoCommonRoot {
        from: &'static str,
        to: &'static str,
    },

    #[error("parent chain of {0} does not terminate")]
    HierarchyTooDeep(&'static str),

    #[error("symbol {0} is declared more than once")]
    DuplicateSymbol(&'static str),

    #[error("{unit} is linked to {other}, which has another dimension")]
    DimensionConflict {
        unit: &'static str,
        other: &'static str,
    },

    #[error("dimension {dimension} has more than one root: {first} and {second}")]
    MultipleRoots {
        dimension: &'static str,
        first: &'static str,
        second: &'static str,
    },
}
