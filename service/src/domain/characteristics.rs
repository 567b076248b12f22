//! [`Characteristics`] definitions.

use std::{
    cmp::Ordering,
    collections::BTreeSet,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use derive_more::{AsRef, Display};
use itertools::Itertools as _;

/// Delimiter separating [`Characteristic`]s in a textual list.
pub const DELIMITER: char = ';';

/// Single named trait of a realty, like `Pool` or `Near MRT`.
///
/// Compared case-insensitively, keeping its original spelling for display.
#[derive(AsRef, Clone, Debug, Display)]
#[as_ref(forward)]
pub struct Characteristic(String);

impl Characteristic {
    /// Creates a new [`Characteristic`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Characteristic`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name
            && !name.is_empty()
            && name.len() <= 128
            && !name.contains(DELIMITER)
    }

    /// Returns the case-folded characters this [`Characteristic`] is compared
    /// by.
    fn key(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().flat_map(char::to_lowercase)
    }
}

impl PartialEq for Characteristic {
    fn eq(&self, other: &Self) -> bool {
        self.key().eq(other.key())
    }
}

impl Eq for Characteristic {}

impl PartialOrd for Characteristic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Characteristic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(other.key())
    }
}

impl Hash for Characteristic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.key() {
            c.hash(state);
        }
    }
}

impl FromStr for Characteristic {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Characteristic`")
    }
}

/// Non-empty set of [`Characteristic`]s, either owned by a realty or desired
/// by a buyer.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Characteristics(BTreeSet<Characteristic>);

impl Characteristics {
    /// Creates new [`Characteristics`] out of the provided ones.
    ///
    /// [`None`] is returned if nothing is provided. Duplicates (ignoring
    /// case) are collapsed, keeping the first spelling.
    #[must_use]
    pub fn new(
        characteristics: impl IntoIterator<Item = Characteristic>,
    ) -> Option<Self> {
        let mut set = BTreeSet::new();
        for c in characteristics {
            _ = set.insert(c);
        }
        (!set.is_empty()).then_some(Self(set))
    }

    /// Checks whether these [`Characteristics`] contain the provided
    /// [`Characteristic`].
    #[must_use]
    pub fn contains(&self, characteristic: &Characteristic) -> bool {
        self.0.contains(characteristic)
    }

    /// Checks whether these [`Characteristics`] contain every one of the
    /// `given` [`Characteristics`].
    #[must_use]
    pub fn contains_all(&self, given: &Self) -> bool {
        given.0.is_subset(&self.0)
    }

    /// Iterates over these [`Characteristics`] in case-insensitive order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Characteristic> {
        self.0.iter()
    }
}

impl fmt::Display for Characteristics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().format("; "))
    }
}

impl FromStr for Characteristics {
    type Err = &'static str;

    /// Parses [`Characteristics`] from a [`DELIMITER`]-separated list.
    ///
    /// Entries are trimmed and blank ones are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let characteristics = s
            .split(DELIMITER)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(Characteristic::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(characteristics).ok_or("no `Characteristic` provided")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::{Characteristic, Characteristics};

    fn characteristics(s: &str) -> Characteristics {
        Characteristics::from_str(s).unwrap()
    }

    #[test]
    fn parses_delimited_list() {
        let parsed = characteristics(" Pool ;Garage;; ");

        assert_eq!(parsed.iter().len(), 2);
        assert!(parsed.contains(&Characteristic::from_str("Pool").unwrap()));
        assert!(parsed.contains(&Characteristic::from_str("Garage").unwrap()));

        assert!(Characteristics::from_str("").is_err());
        assert!(Characteristics::from_str(" ; ;").is_err());
    }

    #[test]
    fn compares_case_insensitively() {
        assert_eq!(
            Characteristic::from_str("Near MRT").unwrap(),
            Characteristic::from_str("near mrt").unwrap(),
        );
        assert_eq!(characteristics("Pool; Garage"), characteristics("garage;POOL"));
        assert_eq!(characteristics("Pool; pool").iter().len(), 1);
    }

    #[test]
    fn contains_all_is_superset_check() {
        let owned = characteristics("Pool; Garage; Gym");

        assert!(owned.contains_all(&characteristics("pool")));
        assert!(owned.contains_all(&characteristics("Gym; Garage")));
        assert!(owned.contains_all(&owned));
        assert!(!owned.contains_all(&characteristics("Pool; Balcony")));
        assert!(!characteristics("Pool").contains_all(&owned));
    }

    #[test]
    fn displays_original_spelling() {
        assert_eq!(characteristics("pool;Garage").to_string(), "Garage; pool");
        assert_eq!(characteristics("Pool; POOL").to_string(), "Pool");
    }
}
