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
use crate::{derived_unit, Joule, Second};

derived_unit!(Watt, "W", [Joule, (Second, -1)]);

#[macro_export]
macro_rules! watts {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Watt>::from(&$num)
    };
}

#[cfg(test)]
mod test {
    use crate::{joules, minutes, seconds, Joule, Quantity};
    use approx::assert_relative_eq;

    #[test]
    fn test_energy_over_time() {
        let e: Quantity<f64, Joule> = (watts!(100) * seconds!(minutes!(2))).into_unit();
        assert_relative_eq!(e, joules!(12_000), max_relative = 1e-12);
    }
}
