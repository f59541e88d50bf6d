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
    conversion::conversion_factor,
    merge::multiply,
    Pow, Quantity, Radian, Unit,
};
use num_traits::{AsPrimitive, Float, Signed};

impl<T: Float, U: Unit> Quantity<T, U> {
    pub fn powi<const N: i64>(self) -> Quantity<T, Pow<U, N>> {
        Quantity::new(self.into_value().powi(N as i32))
    }

    pub fn sqrt(self) -> Quantity<T, Pow<U, 1, 2>> {
        Quantity::new(self.into_value().sqrt())
    }

    pub fn cbrt(self) -> Quantity<T, Pow<U, 1, 3>> {
        Quantity::new(self.into_value().cbrt())
    }

    pub fn fabs(self) -> Self {
        Quantity::new(self.into_value().abs())
    }

    /// `self * y + z` with a single rounding.
    pub fn fma<V: Unit, W: Unit>(self, y: Quantity<T, V>, z: Quantity<T, W>) -> Quantity<T, W> {
        const {
            assert!(
                match multiply(U::UNIT, V::UNIT) {
                    Ok(p) => p.equals(&W::UNIT),
                    Err(_) => false,
                },
                "fma addend must have the unit of the product"
            )
        };
        Quantity::new(self.into_value().mul_add(y.into_value(), z.into_value()))
    }

    pub fn hypot<V: Unit>(self, y: Quantity<T, V>) -> Self {
        const { assert!(U::UNIT.equals(&V::UNIT), "hypot with different units") };
        Quantity::new(self.into_value().hypot(y.into_value()))
    }

    pub fn hypot3<V: Unit, W: Unit>(self, y: Quantity<T, V>, z: Quantity<T, W>) -> Self {
        const {
            assert!(
                U::UNIT.equals(&V::UNIT) && U::UNIT.equals(&W::UNIT),
                "hypot with different units"
            )
        };
        let (x, y, z) = (self.into_value(), y.into_value(), z.into_value());
        Quantity::new((x * x + y * y + z * z).sqrt())
    }

    pub fn fmin<V: Unit>(self, y: Quantity<T, V>) -> Self {
        const { assert!(U::UNIT.equals(&V::UNIT), "fmin with different units") };
        Quantity::new(self.into_value().min(y.into_value()))
    }

    pub fn fmax<V: Unit>(self, y: Quantity<T, V>) -> Self {
        const { assert!(U::UNIT.equals(&V::UNIT), "fmax with different units") };
        Quantity::new(self.into_value().max(y.into_value()))
    }

    /// Positive difference: `self - y` when that is positive, zero otherwise.
    pub fn fdim<V: Unit>(self, y: Quantity<T, V>) -> Self {
        const { assert!(U::UNIT.equals(&V::UNIT), "fdim with different units") };
        let (x, y) = (self.into_value(), y.into_value());
        if x > y {
            Quantity::new(x - y)
        } else {
            Quantity::new(T::zero())
        }
    }
}

impl<T, U> Quantity<T, U>
where
    T: Float + 'static,
    f64: AsPrimitive<T>,
    U: Unit,
{
    pub fn powr<const N: i64, const D: i64>(self) -> Quantity<T, Pow<U, N, D>> {
        let e: T = (N as f64 / D as f64).as_();
        Quantity::new(self.into_value().powf(e))
    }

    fn radians(self) -> T {
        let k = const {
            match conversion_factor(U::UNIT, Radian::UNIT) {
                Ok(k) => k,
                Err(_) => panic!("trigonometry needs an angle"),
            }
        };
        let k: T = k.as_();
        self.into_value() * k
    }

    pub fn sin(self) -> T {
        self.radians().sin()
    }

    pub fn cos(self) -> T {
        self.radians().cos()
    }

    pub fn tan(self) -> T {
        self.radians().tan()
    }
}

impl<T: Signed, U: Unit> Quantity<T, U> {
    pub fn abs(self) -> Self {
        Quantity::new(self.into_value().abs())
    }
}

#[cfg(test)]
mod test {
    use crate::{
        degrees, feet, meters, meters2, newtons, radians, revolutions, seconds, Meter, Pow,
        Quantity, Second,
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    #[test]
    fn test_sqrt_of_area() {
        let side = meters2!(16).sqrt();
        assert_eq!(side, meters!(4));
        assert_eq!(side.to_string(), "4 m");
    }

    #[test]
    fn test_powers() {
        let cube = meters!(2).powi::<3>();
        assert_eq!(cube.value(), 8.0);
        assert_eq!(cube.to_string(), "8 m^3");
        let back = cube.cbrt();
        assert_relative_eq!(back, meters!(2), max_relative = 1e-12);
        let odd: Quantity<f64, Pow<Meter, 2, 3>> = meters!(8).powr::<2, 3>();
        assert_relative_eq!(odd.value(), 4.0, max_relative = 1e-12);
        assert!(odd.to_string().ends_with(" m^(2/3)"));
    }

    #[test]
    fn test_abs() {
        assert_eq!(meters!(-3).fabs(), meters!(3));
        assert_eq!(
            Quantity::<i32, Second>::new(-3).abs(),
            Quantity::<i32, Second>::new(3)
        );
    }

    #[test]
    fn test_fma() {
        let r = seconds!(2).fma(newtons!(3), newtons!(1) * seconds!(1));
        assert_eq!(r.value(), 7.0);
    }

    #[test]
    fn test_hypot() {
        assert_relative_eq!(feet!(3).hypot(feet!(4)), feet!(5), max_relative = 1e-12);
        assert_relative_eq!(
            meters!(2).hypot3(meters!(3), meters!(6)),
            meters!(7),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_min_max_dim() {
        assert_eq!(meters!(2).fmin(meters!(5)), meters!(2));
        assert_eq!(meters!(2).fmax(meters!(5)), meters!(5));
        assert_eq!(meters!(5).fdim(meters!(2)), meters!(3));
        assert_eq!(meters!(2).fdim(meters!(5)), meters!(0));
    }

    #[test]
    fn test_trig() {
        assert_abs_diff_eq!(degrees!(90).sin(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(radians!(PI).cos(), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(revolutions!(0.125).tan(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(degrees!(45).tan(), 1.0, epsilon = 1e-12);
    }
}
