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
use std::marker::PhantomData;

// Autoref dispatch: the by-value impl only exists when `T: Unit`, otherwise
// method resolution falls through to the impl on the reference.

#[doc(hidden)]
pub struct IsUnitProbe<T: ?Sized>(pub PhantomData<T>);

#[doc(hidden)]
pub trait IsUnitYes {
    fn is_unit(&self) -> bool {
        true
    }
}

impl<T: crate::Unit> IsUnitYes for IsUnitProbe<T> {}

#[doc(hidden)]
pub trait IsUnitNo {
    fn is_unit(&self) -> bool {
        false
    }
}

impl<T: ?Sized> IsUnitNo for &IsUnitProbe<T> {}

/// Evaluates to `true` when the given type implements [`Unit`](crate::Unit),
/// and to `false` for any other type. It never fails to compile.
///
/// ```
/// use static_unit::{is_unit, Meter, Newton, Quantity};
///
/// assert!(is_unit!(Meter));
/// assert!(is_unit!(Newton));
/// assert!(!is_unit!(f64));
/// assert!(!is_unit!(Quantity<f64, Meter>));
/// ```
#[macro_export]
macro_rules! is_unit {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::predicates::{IsUnitNo as _, IsUnitYes as _};
        (&$crate::predicates::IsUnitProbe::<$T>(::core::marker::PhantomData)).is_unit()
    }};
}

#[cfg(test)]
mod test {
    use crate::{Dimensionless, Meter, Pow, Prod, Quantity, Second};

    #[test]
    fn test_is_unit() {
        assert!(is_unit!(Meter));
        assert!(is_unit!(Dimensionless));
        assert!(is_unit!(Prod<Meter, Second>));
        assert!(is_unit!(Pow<Meter, 1, 2>));
        assert!(!is_unit!(i32));
        assert!(!is_unit!(str));
        assert!(!is_unit!(Quantity<f32, Second>));
    }
}
