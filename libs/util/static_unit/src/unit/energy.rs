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
use crate::{derived_unit, Meter, Newton};

derived_unit!(Joule, "J", [Newton, Meter]);

#[macro_export]
macro_rules! joules {
    ($num:expr) => {
        $crate::Quantity::<f64, $crate::Joule>::from(&$num)
    };
}

#[cfg(test)]
mod test {
    use crate::{meters, newtons, Joule, Quantity};

    #[test]
    fn test_work() {
        let w: Quantity<f64, Joule> = (newtons!(5) * meters!(3)).into_unit();
        assert_eq!(w, joules!(15));
        assert_eq!(w.to_string(), "15 J");
    }
}
