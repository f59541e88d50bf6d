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
use static_unit::{Kilogram, Meter, Pow, Prod, Quantity, Quot, Second};

pub const STANDARD_GRAVITY: Quantity<f64, Quot<Meter, Pow<Second, 2>>> = Quantity::new(9.806_65);

pub const EARTH_RADIUS: Quantity<f64, Meter> = Quantity::new(6_356_766.0);
pub const EVEREST_HEIGHT: Quantity<f64, Meter> = Quantity::new(8_848.039_2);

pub const SPEED_OF_LIGHT: Quantity<f64, Quot<Meter, Second>> = Quantity::new(299_792_458.0);

pub const GRAVITATIONAL_CONSTANT: Quantity<
    f64,
    Quot<Pow<Meter, 3>, Prod<Kilogram, Pow<Second, 2>>>,
> = Quantity::new(6.674_30e-11);

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use static_unit::{feet, kilometers, pounds, pounds_force, Newton, PoundForce};

    #[test]
    fn test_pound_force_is_pound_times_gravity() {
        let weight = (pounds!(1) * STANDARD_GRAVITY).cast::<PoundForce>();
        assert_relative_eq!(weight, pounds_force!(1), max_relative = 1e-7);
    }

    #[test]
    fn test_light_crosses_earth_radius() {
        let t = (EARTH_RADIUS / SPEED_OF_LIGHT).into_unit::<Second>();
        assert_relative_eq!(t.value(), 0.021_203_889, max_relative = 1e-6);
    }

    #[test]
    fn test_surface_gravity_from_constant() {
        let earth_mass = Quantity::<f64, Kilogram>::new(5.972_2e24);
        let g = (GRAVITATIONAL_CONSTANT * earth_mass / (EARTH_RADIUS * EARTH_RADIUS))
            .into_unit::<Quot<Meter, Pow<Second, 2>>>();
        assert!((g - STANDARD_GRAVITY).value().abs() < 0.1);
        let weight = (Quantity::<f64, Kilogram>::new(1.0) * g).into_unit::<Newton>();
        assert_relative_eq!(weight.value(), g.value());
    }

    #[test]
    fn test_everest() {
        assert_relative_eq!(feet!(EVEREST_HEIGHT).value(), 29_029.0, max_relative = 1e-4);
        assert!(EVEREST_HEIGHT < kilometers!(9).cast::<Meter>());
    }
}
