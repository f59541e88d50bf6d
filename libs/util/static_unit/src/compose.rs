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
use crate::{
    merge::{divide, multiply, pow},
    Rational, Unit, UnitExpr,
};
use std::marker::PhantomData;

/// The unit of a pure number.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Dimensionless;
impl Unit for Dimensionless {
    const UNIT: UnitExpr = UnitExpr::DIMENSIONLESS;
}

#[macro_export]
macro_rules! scalar {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Dimensionless>::from(&$num)
    };
}

/// `A * B`
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Prod<A, B>(PhantomData<(A, B)>);
impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    const UNIT: UnitExpr = match multiply(A::UNIT, B::UNIT) {
        Ok(u) => u,
        Err(_) => panic!("unit product has too many factors"),
    };
}

/// `A / B`
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Quot<A, B>(PhantomData<(A, B)>);
impl<A: Unit, B: Unit> Unit for Quot<A, B> {
    const UNIT: UnitExpr = match divide(A::UNIT, B::UNIT) {
        Ok(u) => u,
        Err(_) => panic!("unit quotient has too many factors"),
    };
}

/// `U^(N/D)`
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Pow<U, const N: i64, const D: i64 = 1>(PhantomData<U>);
impl<U: Unit, const N: i64, const D: i64> Unit for Pow<U, N, D> {
    const UNIT: UnitExpr = pow(U::UNIT, Rational::new(N, D));
}
