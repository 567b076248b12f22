//! [`Filter`]s of [`Property`]s.

use common::PriceRange;

use crate::domain::{Characteristics, Property};

use super::Filter;

/// [`Filter`] passing [`Property`]s having all the given [`Characteristics`].
///
/// [`Property`]s without specified [`Characteristics`] never pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContainingAllCharacteristics(pub Characteristics);

impl Filter<Property> for ContainingAllCharacteristics {
    fn test(&self, property: &Property) -> bool {
        property
            .characteristics()
            .is_some_and(|owned| owned.contains_all(&self.0))
    }
}

/// [`Filter`] passing [`Property`]s priced within the given [`PriceRange`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ByPriceRange(pub PriceRange);

impl Filter<Property> for ByPriceRange {
    fn test(&self, property: &Property) -> bool {
        self.0.contains(property.price())
    }
}
