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
    conversion::conversion_factor, impl_literal_conversions, impl_scalar_ops, supports_scalar_ops,
    Prod, Quot, Unit, UnitExpr,
};
use approx::{AbsDiffEq, RelativeEq};
use num_traits::AsPrimitive;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::Sum,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// A value of type `T` measured in the unit `U`.
///
/// The unit has no runtime representation. Operators that need matching or
/// convertible units check them while the operator is monomorphised, so a
/// mistake fails to compile:
///
/// ```compile_fail
/// use static_unit::{meters, seconds};
///
/// let _ = meters!(1) + seconds!(1);
/// ```
///
/// ```compile_fail
/// use static_unit::{meters, millimeters};
///
/// // Same dimension is not enough; convert explicitly first.
/// let _ = meters!(1) < millimeters!(1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Quantity<T, U: Unit> {
    v: T,
    phantom: PhantomData<U>,
}

impl<T, U: Unit> Quantity<T, U> {
    pub const fn new(v: T) -> Self {
        Self {
            v,
            phantom: PhantomData,
        }
    }

    pub const fn value_ref(&self) -> &T {
        &self.v
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.v
    }

    pub fn into_value(self) -> T {
        self.v
    }

    pub const fn unit() -> UnitExpr {
        U::UNIT
    }

    pub fn symbol() -> String {
        U::symbol()
    }

    /// Re-spell the unit as another expression of exactly the same unit, such
    /// as `kg m s^-2` as `N`. No scaling happens.
    pub fn into_unit<V: Unit>(self) -> Quantity<T, V> {
        const {
            assert!(
                U::UNIT.equals(&V::UNIT),
                "into_unit requires identical units; use cast to convert"
            )
        };
        Quantity::new(self.v)
    }

    /// Change the payload type, keeping the unit.
    pub fn value_into<S>(self) -> Quantity<S, U>
    where
        T: Into<S>,
    {
        Quantity::new(self.v.into())
    }
}

impl<T: Copy, U: Unit> Quantity<T, U> {
    pub const fn value(&self) -> T {
        self.v
    }
}

impl<T, U> Quantity<T, U>
where
    T: AsPrimitive<f64>,
    f64: AsPrimitive<T>,
    U: Unit,
{
    /// Convert into a unit of the same dimensions, scaling the value.
    ///
    /// ```
    /// use static_unit::{feet, Meter};
    ///
    /// let m = feet!(10).cast::<Meter>();
    /// assert!((m.value() - 3.048).abs() < 1e-12);
    /// ```
    ///
    /// Units that do not reduce to the same dimensions are rejected:
    ///
    /// ```compile_fail
    /// use static_unit::{joules, Centimeter, Decagram, Minute, Pow, Prod, Quot};
    ///
    /// type Odd = Quot<Prod<Centimeter, Decagram>, Pow<Minute, 2>>;
    /// let _ = joules!(1).cast::<Odd>();
    /// ```
    pub fn cast<V: Unit>(self) -> Quantity<T, V> {
        Quantity::<T, V>::from(&self)
    }

    /// The plain number behind a quantity whose unit cancels out, with any
    /// scale (`m / mm` is 1000) applied.
    pub fn into_scalar(self) -> T {
        let k = const {
            match conversion_factor(U::UNIT, UnitExpr::DIMENSIONLESS) {
                Ok(k) => k,
                Err(_) => panic!("into_scalar requires a dimensionless unit"),
            }
        };
        (self.v.as_() * k).as_()
    }

    pub fn f64(self) -> f64 {
        self.v.as_()
    }

    pub fn f32(self) -> f32 {
        let v: f64 = self.v.as_();
        v as f32
    }
}

/// Free-function spelling of [`Quantity::cast`].
pub fn quantity_cast<V, T, U>(q: Quantity<T, U>) -> Quantity<T, V>
where
    T: AsPrimitive<f64>,
    f64: AsPrimitive<T>,
    U: Unit,
    V: Unit,
{
    q.cast::<V>()
}

impl<T, U> fmt::Display for Quantity<T, U>
where
    T: fmt::Display,
    U: Unit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v, f)?;
        if U::UNIT.is_dimensionless() {
            Ok(())
        } else {
            write!(f, " {}", U::UNIT)
        }
    }
}

impl<'a, T, U, V> From<&'a Quantity<T, V>> for Quantity<T, U>
where
    T: AsPrimitive<f64>,
    f64: AsPrimitive<T>,
    U: Unit,
    V: Unit,
{
    fn from(q: &'a Quantity<T, V>) -> Self {
        // Identical units copy the payload so wide integers keep every bit.
        if const { U::UNIT.equals(&V::UNIT) } {
            return Self::new(q.v);
        }
        let k = const {
            match conversion_factor(V::UNIT, U::UNIT) {
                Ok(k) => k,
                Err(_) => panic!("cannot convert between these units"),
            }
        };
        Self::new((q.v.as_() * k).as_())
    }
}

impl<T: Hash, U: Unit> Hash for Quantity<T, U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.v.hash(state);
    }
}

impl<T, U, V> PartialEq<Quantity<T, V>> for Quantity<T, U>
where
    T: PartialEq,
    U: Unit,
    V: Unit,
{
    fn eq(&self, other: &Quantity<T, V>) -> bool {
        const { assert!(U::UNIT.equals(&V::UNIT), "comparison of different units") };
        self.v == other.v
    }
}

impl<T: Eq, U: Unit> Eq for Quantity<T, U> {}

impl<T, U, V> PartialOrd<Quantity<T, V>> for Quantity<T, U>
where
    T: PartialOrd,
    U: Unit,
    V: Unit,
{
    fn partial_cmp(&self, other: &Quantity<T, V>) -> Option<Ordering> {
        const { assert!(U::UNIT.equals(&V::UNIT), "comparison of different units") };
        self.v.partial_cmp(&other.v)
    }
}

impl<T: Ord, U: Unit> Ord for Quantity<T, U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.v.cmp(&other.v)
    }
}

impl<T, U, V> AbsDiffEq<Quantity<T, V>> for Quantity<T, U>
where
    T: AbsDiffEq,
    U: Unit,
    V: Unit,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Quantity<T, V>, epsilon: Self::Epsilon) -> bool {
        const { assert!(U::UNIT.equals(&V::UNIT), "comparison of different units") };
        self.v.abs_diff_eq(&other.v, epsilon)
    }
}

impl<T, U, V> RelativeEq<Quantity<T, V>> for Quantity<T, U>
where
    T: RelativeEq,
    U: Unit,
    V: Unit,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Quantity<T, V>,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        const { assert!(U::UNIT.equals(&V::UNIT), "comparison of different units") };
        self.v.relative_eq(&other.v, epsilon, max_relative)
    }
}

impl<T, U, V> Add<Quantity<T, V>> for Quantity<T, U>
where
    T: Add<Output = T>,
    U: Unit,
    V: Unit,
{
    type Output = Quantity<T, U>;

    fn add(self, other: Quantity<T, V>) -> Self::Output {
        const { assert!(U::UNIT.equals(&V::UNIT), "operator+ with different units") };
        Quantity::new(self.v + other.v)
    }
}

impl<T, U, V> AddAssign<Quantity<T, V>> for Quantity<T, U>
where
    T: AddAssign,
    U: Unit,
    V: Unit,
{
    fn add_assign(&mut self, other: Quantity<T, V>) {
        const { assert!(U::UNIT.equals(&V::UNIT), "operator+= with different units") };
        self.v += other.v;
    }
}

impl<T, U, V> Sub<Quantity<T, V>> for Quantity<T, U>
where
    T: Sub<Output = T>,
    U: Unit,
    V: Unit,
{
    type Output = Quantity<T, U>;

    fn sub(self, other: Quantity<T, V>) -> Self::Output {
        const { assert!(U::UNIT.equals(&V::UNIT), "operator- with different units") };
        Quantity::new(self.v - other.v)
    }
}

impl<T, U, V> SubAssign<Quantity<T, V>> for Quantity<T, U>
where
    T: SubAssign,
    U: Unit,
    V: Unit,
{
    fn sub_assign(&mut self, other: Quantity<T, V>) {
        const { assert!(U::UNIT.equals(&V::UNIT), "operator-= with different units") };
        self.v -= other.v;
    }
}

impl<T, U, V> Mul<Quantity<T, V>> for Quantity<T, U>
where
    T: Mul<Output = T>,
    U: Unit,
    V: Unit,
{
    type Output = Quantity<T, Prod<U, V>>;

    fn mul(self, other: Quantity<T, V>) -> Self::Output {
        Quantity::new(self.v * other.v)
    }
}

impl<T, U, V> Div<Quantity<T, V>> for Quantity<T, U>
where
    T: Div<Output = T>,
    U: Unit,
    V: Unit,
{
    type Output = Quantity<T, Quot<U, V>>;

    fn div(self, other: Quantity<T, V>) -> Self::Output {
        Quantity::new(self.v / other.v)
    }
}

impl<T, U> Neg for Quantity<T, U>
where
    T: Neg<Output = T>,
    U: Unit,
{
    type Output = Quantity<T, U>;

    fn neg(self) -> Self::Output {
        Quantity::new(-self.v)
    }
}

impl<T: Sum, U: Unit> Sum for Quantity<T, U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Quantity::new(iter.map(|q| q.v).sum())
    }
}

impl<'a, T, U> Sum<&'a Quantity<T, U>> for Quantity<T, U>
where
    T: Sum<&'a T> + 'a,
    U: Unit,
{
    fn sum<I: Iterator<Item = &'a Quantity<T, U>>>(iter: I) -> Self {
        Quantity::new(iter.map(|q| &q.v).sum())
    }
}

supports_scalar_ops!(impl_scalar_ops);
supports_scalar_ops!(impl_literal_conversions);
