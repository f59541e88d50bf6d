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
    merge::{flatten, inverse, multiply},
    Descriptor, UnitError, UnitExpr,
};

/// Tag identity of two descriptors.
pub const fn is_same_base(a: &Descriptor, b: &Descriptor) -> bool {
    a.same(b)
}

/// Succeeds when `a` and `b` flatten to the same base factors. Reports the first
/// factor that failed to cancel otherwise.
pub const fn ensure_same(a: UnitExpr, b: UnitExpr) -> Result<(), UnitError> {
    let a = match flatten(a) {
        Ok(a) => a,
        Err(e) => return Err(e),
    };
    let b = match flatten(b) {
        Ok(b) => b,
        Err(e) => return Err(e),
    };
    let residue = match multiply(a, inverse(b)) {
        Ok(r) => r,
        Err(e) => return Err(e),
    };
    if residue.is_dimensionless() {
        Ok(())
    } else {
        Err(UnitError::UnitMismatch {
            residue: residue.get(0),
        })
    }
}

/// Exact unit equality. Never converts: `m` and `mm` are different units.
pub const fn equals(a: UnitExpr, b: UnitExpr) -> bool {
    ensure_same(a, b).is_ok()
}

impl UnitExpr {
    pub const fn equals(&self, other: &UnitExpr) -> bool {
        equals(*self, *other)
    }
}

impl PartialEq for UnitExpr {
    fn eq(&self, other: &Self) -> bool {
        equals(*self, *other)
    }
}
