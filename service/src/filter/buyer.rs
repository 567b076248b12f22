//! [`Filter`]s of [`Buyer`]s.

use common::Price;

use crate::domain::{buyer::Priority, Buyer, Characteristics};

use super::Filter;

/// [`Filter`] passing [`Buyer`]s desiring all the given [`Characteristics`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContainingAllCharacteristics {
    /// [`Characteristics`] a [`Buyer`] must desire.
    characteristics: Characteristics,
}

impl ContainingAllCharacteristics {
    /// Creates a new [`ContainingAllCharacteristics`] [`Filter`].
    #[must_use]
    pub fn new(characteristics: Characteristics) -> Self {
        Self { characteristics }
    }

    /// Returns [`Characteristics`] a [`Buyer`] must desire.
    #[must_use]
    pub fn characteristics(&self) -> &Characteristics {
        &self.characteristics
    }
}

impl Filter<Buyer> for ContainingAllCharacteristics {
    fn test(&self, buyer: &Buyer) -> bool {
        // Buyers without desired characteristics never pass.
        buyer
            .desired_characteristics()
            .is_some_and(|desired| desired.contains_all(&self.characteristics))
    }
}

/// [`Filter`] passing [`Buyer`]s of the given [`Priority`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ByPriority(pub Priority);

impl Filter<Buyer> for ByPriority {
    fn test(&self, buyer: &Buyer) -> bool {
        buyer.priority() == self.0
    }
}

/// [`Filter`] passing [`Buyer`]s ready to pay the given [`Price`].
///
/// [`Buyer`]s without a price range never pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ByPrice(pub Price);

impl Filter<Buyer> for ByPrice {
    fn test(&self, buyer: &Buyer) -> bool {
        buyer.price_range().is_some_and(|range| range.contains(self.0))
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{Price, PriceRange};

    use crate::{
        domain::{
            buyer::{Email, Name, Phone, Priority},
            Address, Buyer, Characteristics,
        },
        Filter as _,
    };

    use super::{ByPrice, ByPriority, ContainingAllCharacteristics};

    fn characteristics(s: &str) -> Characteristics {
        Characteristics::from_str(s).unwrap()
    }

    fn buyer(
        desired: Option<&str>,
        range: Option<&str>,
        priority: Priority,
    ) -> Buyer {
        Buyer::new(
            Name::from_str("Alice Pauline").unwrap(),
            Phone::from_str("94351253").unwrap(),
            Email::from_str("alice@example.com").unwrap(),
            Address::from_str("123, Jurong West Ave 6").unwrap(),
            range.map(|r| PriceRange::from_str(r).unwrap()),
            desired.map(characteristics),
            priority,
        )
    }

    fn wanting(desired: Option<&str>) -> Buyer {
        buyer(desired, None, Priority::Normal)
    }

    #[test]
    fn passes_superset_of_characteristics() {
        let filter = ContainingAllCharacteristics::new(characteristics("pool"));

        assert!(filter.test(&wanting(Some("pool; garage"))));
        assert!(filter.test(&wanting(Some("Pool"))));
        assert!(!filter.test(&wanting(Some("garage"))));
    }

    #[test]
    fn rejects_proper_subset_of_characteristics() {
        let filter =
            ContainingAllCharacteristics::new(characteristics("Pool; Garage"));

        assert!(!filter.test(&wanting(Some("Pool"))));
        assert!(filter.test(&wanting(Some("Garage; Gym; Pool"))));
    }

    #[test]
    fn rejects_buyers_without_desired_characteristics() {
        for target in ["pool", "pool; garage", "anything"] {
            let filter =
                ContainingAllCharacteristics::new(characteristics(target));
            assert!(!filter.test(&wanting(None)));
        }
    }

    #[test]
    fn equal_by_target_characteristics() {
        assert_eq!(
            ContainingAllCharacteristics::new(characteristics("Pool; Garage")),
            ContainingAllCharacteristics::new(characteristics("garage; pool")),
        );
        assert_ne!(
            ContainingAllCharacteristics::new(characteristics("Pool")),
            ContainingAllCharacteristics::new(characteristics("Garage")),
        );
    }

    #[test]
    fn filters_by_priority() {
        let high = buyer(None, None, Priority::High);

        assert!(ByPriority(Priority::High).test(&high));
        assert!(!ByPriority(Priority::Low).test(&high));
    }

    #[test]
    fn filters_by_price() {
        let price = |s| Price::from_str(s).unwrap();
        let ranged = buyer(None, Some("100 - 200"), Priority::Normal);

        assert!(ByPrice(price("100")).test(&ranged));
        assert!(ByPrice(price("200")).test(&ranged));
        assert!(!ByPrice(price("201")).test(&ranged));
        assert!(!ByPrice(price("150")).test(&buyer(None, None, Priority::Normal)));
    }
}
