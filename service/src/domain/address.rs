//! [`Address`] definitions.

use std::str::FromStr;

use derive_more::{AsRef, Display};

#[cfg(doc)]
use crate::domain::{Buyer, Property};

/// Full address of a [`Property`] or a [`Buyer`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address && !address.is_empty() && address.len() <= 512
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

#[cfg(test)]
mod spec {
    use super::Address;

    #[test]
    fn validates_format() {
        assert!(Address::new("Blk 30 Geylang Street 29, #06-40").is_some());

        assert!(Address::new("").is_none());
        assert!(Address::new(" Geylang").is_none());
        assert!(Address::new("Geylang ").is_none());
        assert!(Address::new("a".repeat(513)).is_none());
    }
}
