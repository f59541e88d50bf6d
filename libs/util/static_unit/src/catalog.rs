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
    config::MAX_HIERARCHY_DEPTH, ArcMinute, ArcSecond, BaseUnit, Centimeter, Day, Decagram,
    Decameter, Decimeter, Degree, Descriptor, Dyne, Foot, Gram, Hectometer, Hour, Inch, Joule,
    Kelvin, Kilogram, Kilometer, Meter, Mile, Milligram, Millimeter, Millisecond, Minute, Named,
    NauticalMile, Newton, Pascal, Pound, PoundForce, Radian, Rankine, Revolution, Second, Slug,
    UnitError, Watt, Yard,
};
use log::{debug, warn};
use std::collections::{hash_map::Entry, HashMap, HashSet};

/// A set of declared units that can be checked for consistency as a whole.
///
/// Unit declarations are consts, so mistakes such as a duplicated symbol or a
/// second root for a dimension only show up when units are looked at together.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    descriptors: Vec<Descriptor>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every unit this crate declares.
    pub fn standard() -> Self {
        Self::new()
            // length
            .with::<Meter>()
            .with::<Decimeter>()
            .with::<Centimeter>()
            .with::<Millimeter>()
            .with::<Decameter>()
            .with::<Hectometer>()
            .with::<Kilometer>()
            .with::<NauticalMile>()
            .with::<Foot>()
            .with::<Inch>()
            .with::<Yard>()
            .with::<Mile>()
            // mass
            .with::<Kilogram>()
            .with::<Gram>()
            .with::<Decagram>()
            .with::<Milligram>()
            .with::<Pound>()
            .with::<Slug>()
            // time
            .with::<Second>()
            .with::<Millisecond>()
            .with::<Minute>()
            .with::<Hour>()
            .with::<Day>()
            // angle
            .with::<Radian>()
            .with::<Degree>()
            .with::<ArcMinute>()
            .with::<ArcSecond>()
            .with::<Revolution>()
            // temperature
            .with::<Kelvin>()
            .with::<Rankine>()
            // derived
            .with::<Newton>()
            .with::<PoundForce>()
            .with::<Dyne>()
            .with::<Joule>()
            .with::<Watt>()
            .with::<Pascal>()
    }

    pub fn with<U: Named>(mut self) -> Self {
        self.insert(U::DESCRIPTOR);
        self
    }

    pub fn insert(&mut self, descriptor: Descriptor) {
        self.descriptors.push(descriptor);
    }

    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn find(&self, symbol: &str) -> Option<Descriptor> {
        self.descriptors
            .iter()
            .find(|d| d.symbol() == symbol)
            .copied()
    }

    /// Check the catalogue as a whole: symbols are unique, every parent chain
    /// and custom conversion stays within one dimension and ends at a root, and
    /// each dimension has exactly one root. Derived units must flatten.
    pub fn validate(&self) -> Result<(), UnitError> {
        let mut symbols = HashSet::new();
        let mut roots: HashMap<&'static str, &'static str> = HashMap::new();
        for descriptor in &self.descriptors {
            if !symbols.insert(descriptor.symbol()) {
                warn!("unit symbol {} is declared twice", descriptor.symbol());
                return Err(UnitError::DuplicateSymbol(descriptor.symbol()));
            }
            match descriptor {
                Descriptor::Base(unit) => {
                    Self::check_conversions(unit)?;
                    let root = Self::root_of(unit)?;
                    let dimension = unit.dimension().name();
                    match roots.entry(dimension) {
                        Entry::Occupied(e) if *e.get() != root.symbol() => {
                            warn!(
                                "dimension {} has roots {} and {}",
                                dimension,
                                e.get(),
                                root.symbol()
                            );
                            return Err(UnitError::MultipleRoots {
                                dimension,
                                first: *e.get(),
                                second: root.symbol(),
                            });
                        }
                        Entry::Occupied(_) => {}
                        Entry::Vacant(e) => {
                            e.insert(root.symbol());
                        }
                    }
                    debug!("{} [{}] resolves to {}", unit.symbol(), dimension, root.symbol());
                }
                Descriptor::Derived(_) => {
                    let flat = descriptor.flat()?;
                    debug!("{} = {}", descriptor, flat);
                }
            }
        }
        debug!(
            "validated {} units across {} dimensions",
            self.descriptors.len(),
            roots.len()
        );
        Ok(())
    }

    fn check_conversions(unit: &'static BaseUnit) -> Result<(), UnitError> {
        for conversion in unit.conversions() {
            if !conversion.to().dimension().same(&unit.dimension()) {
                warn!(
                    "{} converts directly to {} across dimensions",
                    unit.symbol(),
                    conversion.to().symbol()
                );
                return Err(UnitError::DimensionConflict {
                    unit: unit.symbol(),
                    other: conversion.to().symbol(),
                });
            }
        }
        Ok(())
    }

    fn root_of(unit: &'static BaseUnit) -> Result<&'static BaseUnit, UnitError> {
        let mut current = unit;
        let mut depth = 0;
        while let Some(parent) = current.parent() {
            if !parent.dimension().same(&current.dimension()) {
                return Err(UnitError::DimensionConflict {
                    unit: current.symbol(),
                    other: parent.symbol(),
                });
            }
            depth += 1;
            if depth > MAX_HIERARCHY_DEPTH {
                warn!("parent chain of {} does not terminate", unit.symbol());
                return Err(UnitError::HierarchyTooDeep(unit.symbol()));
            }
            current = parent;
        }
        Ok(current)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{base_unit, root_unit, Unit, LENGTH};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    root_unit!(SurveyRod, "rod_root", LENGTH);
    base_unit!(Sideways, "sideways", Meter, 2.0, [Second => 1.0]);

    #[test]
    fn test_standard_catalog_validates() {
        init();
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 36);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.find("lbf"), Some(PoundForce::DESCRIPTOR));
        assert_eq!(catalog.find("°R"), Some(Rankine::DESCRIPTOR));
        assert!(catalog.find("furlong").is_none());
    }

    #[test]
    fn test_duplicate_symbol() {
        init();
        let catalog = Catalog::new().with::<Meter>().with::<Foot>().with::<Meter>();
        assert_eq!(catalog.validate(), Err(UnitError::DuplicateSymbol("m")));
    }

    #[test]
    fn test_multiple_roots() {
        init();
        let catalog = Catalog::new().with::<Foot>().with::<SurveyRod>();
        assert_eq!(
            catalog.validate(),
            Err(UnitError::MultipleRoots {
                dimension: "length",
                first: "m",
                second: "rod_root",
            })
        );
        assert!(!SurveyRod::UNIT.is_convertible(&Meter::UNIT));
    }

    #[test]
    fn test_conversion_across_dimensions() {
        init();
        let catalog = Catalog::new().with::<Sideways>();
        assert_eq!(
            catalog.validate(),
            Err(UnitError::DimensionConflict {
                unit: "sideways",
                other: "s",
            })
        );
    }
}
