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

#[macro_export]
macro_rules! supports_scalar_ops {
    ($it:tt) => {
        $it!(f64);
        $it!(f32);
        $it!(isize);
        $it!(i64);
        $it!(i32);
        $it!(i16);
        $it!(i8);
    };
}

#[macro_export]
macro_rules! impl_scalar_ops {
    ($Num:ty) => {
        impl<U: $crate::Unit> std::ops::Mul<$Num> for $crate::Quantity<$Num, U> {
            type Output = $crate::Quantity<$Num, U>;

            fn mul(self, s: $Num) -> Self::Output {
                $crate::Quantity::new(self.into_value() * s)
            }
        }

        impl<U: $crate::Unit> std::ops::MulAssign<$Num> for $crate::Quantity<$Num, U> {
            fn mul_assign(&mut self, s: $Num) {
                *self.value_mut() *= s;
            }
        }

        impl<U: $crate::Unit> std::ops::Div<$Num> for $crate::Quantity<$Num, U> {
            type Output = $crate::Quantity<$Num, U>;

            fn div(self, s: $Num) -> Self::Output {
                $crate::Quantity::new(self.into_value() / s)
            }
        }

        impl<U: $crate::Unit> std::ops::DivAssign<$Num> for $crate::Quantity<$Num, U> {
            fn div_assign(&mut self, s: $Num) {
                *self.value_mut() /= s;
            }
        }

        impl<U: $crate::Unit> std::ops::Mul<$crate::Quantity<$Num, U>> for $Num {
            type Output = $crate::Quantity<$Num, U>;

            fn mul(self, q: $crate::Quantity<$Num, U>) -> Self::Output {
                $crate::Quantity::new(self * q.into_value())
            }
        }

        impl<U: $crate::Unit> std::ops::Div<$crate::Quantity<$Num, U>> for $Num {
            type Output = $crate::Quantity<$Num, $crate::Pow<U, { -1 }>>;

            fn div(self, q: $crate::Quantity<$Num, U>) -> Self::Output {
                $crate::Quantity::new(self / q.into_value())
            }
        }
    };
}

// Literal constructors build f64 quantities from any supported number, the
// same way the unit macros accept either a number or another quantity.
#[macro_export]
macro_rules! impl_literal_conversions {
    ($Num:ty) => {
        impl<U: $crate::Unit> From<$Num> for $crate::Quantity<f64, U> {
            fn from(v: $Num) -> Self {
                Self::new(v as f64)
            }
        }

        impl<U: $crate::Unit> From<&$Num> for $crate::Quantity<f64, U> {
            fn from(v: &$Num) -> Self {
                Self::new(*v as f64)
            }
        }
    };
}
