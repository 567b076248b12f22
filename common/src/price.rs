//! [`Price`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Non-negative price of a realty.
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
pub struct Price(Decimal);

impl Price {
    /// Creates a new [`Price`] if the provided `amount` is not negative.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        (amount >= Decimal::ZERO).then_some(Self(amount))
    }

    /// Returns the amount of this [`Price`].
    #[must_use]
    pub fn amount(self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `Price`")
    }
}

/// Inclusive range of [`Price`]s.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{lower} - {upper}")]
pub struct PriceRange {
    /// Lower bound of this [`PriceRange`].
    lower: Price,

    /// Upper bound of this [`PriceRange`].
    upper: Price,
}

impl PriceRange {
    /// Creates a new [`PriceRange`] if `lower` doesn't exceed `upper`.
    #[must_use]
    pub fn new(lower: Price, upper: Price) -> Option<Self> {
        (lower <= upper).then_some(Self { lower, upper })
    }

    /// Returns the lower bound of this [`PriceRange`].
    #[must_use]
    pub fn lower(self) -> Price {
        self.lower
    }

    /// Returns the upper bound of this [`PriceRange`].
    #[must_use]
    pub fn upper(self) -> Price {
        self.upper
    }

    /// Checks whether the provided [`Price`] lies within this [`PriceRange`].
    #[must_use]
    pub fn contains(self, price: Price) -> bool {
        self.lower <= price && price <= self.upper
    }
}

impl FromStr for PriceRange {
    type Err = &'static str;

    /// Parses a [`PriceRange`] in `{lower} - {upper}` format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lower, upper) = s.split_once('-').ok_or("missing `-` separator")?;
        let lower = Price::from_str(lower.trim())?;
        let upper = Price::from_str(upper.trim())?;

        Self::new(lower, upper).ok_or("lower bound exceeds upper bound")
    }
}
