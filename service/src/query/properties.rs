//! [`Query`] collection related to multiple [`Property`]s.

use crate::{
    domain::Property,
    filter::{property, Everything},
};
#[cfg(doc)]
use crate::{domain::Characteristics, Query};

use super::Filtered;

/// Queries all the [`Property`]s.
pub type All = Filtered<Property, Everything>;

/// Queries [`Property`]s having all the given [`Characteristics`].
pub type ContainingAllCharacteristics =
    Filtered<Property, property::ContainingAllCharacteristics>;

/// Queries [`Property`]s priced within the given range.
pub type ByPriceRange = Filtered<Property, property::ByPriceRange>;
