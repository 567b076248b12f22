//! [`Query`] collection related to multiple [`Buyer`]s.

use crate::{
    domain::Buyer,
    filter::{buyer, Everything},
};
#[cfg(doc)]
use crate::{domain::Characteristics, Query};

use super::Filtered;

/// Queries all the [`Buyer`]s.
pub type All = Filtered<Buyer, Everything>;

/// Queries [`Buyer`]s desiring all the given [`Characteristics`].
pub type ContainingAllCharacteristics =
    Filtered<Buyer, buyer::ContainingAllCharacteristics>;

/// Queries [`Buyer`]s of the given [`buyer::Priority`].
///
/// [`buyer::Priority`]: crate::domain::buyer::Priority
pub type ByPriority = Filtered<Buyer, buyer::ByPriority>;

/// Queries [`Buyer`]s ready to pay the given price.
pub type ByPrice = Filtered<Buyer, buyer::ByPrice>;
