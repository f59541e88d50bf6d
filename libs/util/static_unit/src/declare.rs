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

/// Declare the root unit of a dimension.
///
/// ```
/// use static_unit::{root_unit, Dimension, Unit};
///
/// root_unit!(Byte, "B", Dimension::new("information"));
/// assert_eq!(Byte::symbol(), "B");
/// assert!(Byte::BASE.is_root());
/// ```
#[macro_export]
macro_rules! root_unit {
    ($(#[$meta:meta])* $Name:ident, $symbol:literal, $dimension:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $Name;
        impl $Name {
            pub const BASE: $crate::BaseUnit = $crate::BaseUnit::root($symbol, $dimension);
        }
        $crate::impl_named_unit!($Name, $crate::Descriptor::Base(&$Name::BASE));
    };
}

/// Declare a base unit as a multiple of its parent, optionally with direct
/// conversions to other units of the dimension.
///
/// ```
/// use static_unit::{base_unit, root_unit, Dimension, Unit};
///
/// root_unit!(Byte, "B", Dimension::new("information"));
/// base_unit!(Kibibyte, "KiB", Byte, 1024.0);
/// base_unit!(Bit, "b", Byte, 0.125, [Kibibyte => 1.0 / 8192.0]);
/// assert_eq!(Kibibyte::UNIT.conversion_factor(&Byte::UNIT), Ok(1024.0));
/// assert_eq!(Kibibyte::UNIT.conversion_factor(&Bit::UNIT), Ok(8192.0));
/// ```
#[macro_export]
macro_rules! base_unit {
    ($(#[$meta:meta])* $Name:ident, $symbol:literal, $Parent:ty, $to_parent:expr) => {
        $crate::base_unit!($(#[$meta])* $Name, $symbol, $Parent, $to_parent, []);
    };
    ($(#[$meta:meta])* $Name:ident, $symbol:literal, $Parent:ty, $to_parent:expr,
     [$($Other:ty => $factor:expr),* $(,)?]) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $Name;
        impl $Name {
            const CONVERSIONS: &'static [$crate::CustomConversion] =
                &[$($crate::CustomConversion::new(&<$Other>::BASE, $factor)),*];
            pub const BASE: $crate::BaseUnit =
                $crate::BaseUnit::child($symbol, &<$Parent>::BASE, $to_parent)
                    .with_conversions(Self::CONVERSIONS);
        }
        $crate::impl_named_unit!($Name, $crate::Descriptor::Base(&$Name::BASE));
    };
}

/// Declare a named product of other units. Each factor is a unit, a unit with an
/// integer power, or a unit with a rational power.
///
/// ```
/// use static_unit::{derived_unit, Kilogram, Meter, Second, Unit};
///
/// derived_unit!(Gray, "Gy", [Meter, (Second, -2)]);
/// derived_unit!(Action, "Js", [Kilogram, (Meter, 2), (Second, -1)]);
/// assert_eq!(Gray::symbol(), "Gy");
/// assert_eq!(Gray::flat().unwrap().to_string(), "m s^-2");
/// ```
#[macro_export]
macro_rules! derived_unit {
    ($(#[$meta:meta])* $Name:ident, $symbol:literal, [$($factor:tt),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $Name;
        impl $Name {
            const DEFINITION: &'static [$crate::Factor] =
                &[$($crate::derived_unit!(@factor $factor)),+];
            pub const DERIVED: $crate::DerivedUnit =
                $crate::DerivedUnit::new($symbol, Self::DEFINITION);
        }
        $crate::impl_named_unit!($Name, $crate::Descriptor::Derived(&$Name::DERIVED));
    };
    (@factor ($U:ty, $num:expr, $den:expr)) => {
        $crate::Factor::new(
            <$U as $crate::Named>::DESCRIPTOR,
            $crate::Rational::new($num, $den),
        )
    };
    (@factor ($U:ty, $num:expr)) => {
        $crate::Factor::new(
            <$U as $crate::Named>::DESCRIPTOR,
            $crate::Rational::integer($num),
        )
    };
    (@factor $U:ty) => {
        $crate::Factor::new(<$U as $crate::Named>::DESCRIPTOR, $crate::Rational::ONE)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! impl_named_unit {
    ($Name:ident, $descriptor:expr) => {
        impl $crate::Named for $Name {
            const DESCRIPTOR: $crate::Descriptor = $descriptor;
        }
        impl $crate::Unit for $Name {
            const UNIT: $crate::UnitExpr =
                $crate::UnitExpr::from_descriptor(<$Name as $crate::Named>::DESCRIPTOR);
        }
    };
}
