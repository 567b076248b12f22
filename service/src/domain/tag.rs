//! [`Tag`] definitions.

use std::{str::FromStr, sync::LazyLock};

use derive_more::{AsRef, Display};
use regex::Regex;

/// Short alphanumeric label attached to a realty listing.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[as_ref(forward)]
pub struct Tag(String);

impl Tag {
    /// Creates a new [`Tag`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Tag`].
    fn check(name: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Tag`] invariants:
        /// - Must not be empty;
        /// - Must consist of letters and digits only.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[\p{L}\p{N}]{1,64}$").expect("valid regex")
        });

        REGEX.is_match(name.as_ref())
    }
}

impl FromStr for Tag {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Tag`")
    }
}
