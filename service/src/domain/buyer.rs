//! [`Buyer`] definitions.

use std::{fmt, str::FromStr, sync::LazyLock};

use common::{define_kind, PriceRange};
use derive_more::{AsRef, Display};
use regex::Regex;

use crate::domain::{Address, Characteristics};

/// Client looking for a realty to buy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Buyer {
    /// [`Name`] of this [`Buyer`].
    name: Name,

    /// [`Phone`] of this [`Buyer`].
    phone: Phone,

    /// [`Email`] of this [`Buyer`].
    email: Email,

    /// [`Address`] of this [`Buyer`].
    address: Address,

    /// [`PriceRange`] this [`Buyer`] is ready to pay, if known.
    price_range: Option<PriceRange>,

    /// [`Characteristics`] this [`Buyer`] desires, if known.
    desired_characteristics: Option<Characteristics>,

    /// [`Priority`] of this [`Buyer`].
    priority: Priority,
}

impl Buyer {
    /// Creates a new [`Buyer`] out of the provided validated fields.
    #[must_use]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        price_range: Option<PriceRange>,
        desired_characteristics: Option<Characteristics>,
        priority: Priority,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            price_range,
            desired_characteristics,
            priority,
        }
    }

    /// Returns [`Name`] of this [`Buyer`].
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns [`Phone`] of this [`Buyer`].
    #[must_use]
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns [`Email`] of this [`Buyer`].
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns [`Address`] of this [`Buyer`].
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns [`PriceRange`] of this [`Buyer`], if known.
    #[must_use]
    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }

    /// Returns [`Characteristics`] desired by this [`Buyer`], if known.
    #[must_use]
    pub fn desired_characteristics(&self) -> Option<&Characteristics> {
        self.desired_characteristics.as_ref()
    }

    /// Returns [`Priority`] of this [`Buyer`].
    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Checks whether this [`Buyer`] has the same [`Name`] as the `other` one.
    #[must_use]
    pub fn is_same_buyer(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Buyer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            name,
            phone,
            email,
            address,
            price_range,
            desired_characteristics,
            priority,
        } = self;

        write!(
            f,
            "{name}; Phone: {phone}; Email: {email}; Address: {address}; \
             Price Range: ",
        )?;
        match price_range {
            Some(range) => write!(f, "{range}")?,
            None => write!(f, "Not Specified")?,
        }
        write!(f, "; Desired Characteristics: ")?;
        match desired_characteristics {
            Some(c) => write!(f, "{c}")?,
            None => write!(f, "Not Specified")?,
        }
        write!(f, "; Priority: {priority}")
    }
}

/// Name of a [`Buyer`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Name`] invariants:
        /// - Must start and end with a letter or a digit;
        /// - Must consist of letters, digits and spaces only;
        /// - Must be at most 100 characters long.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[\p{L}\p{N}]([\p{L}\p{N} ]{0,98}[\p{L}\p{N}])?$")
                .expect("valid regex")
        });

        REGEX.is_match(name.as_ref())
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Phone number of a [`Buyer`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Phone`] format: at least 3 digits,
        /// optionally prefixed with `+`.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^\+?\d{3,15}$").expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

/// Email address of a [`Buyer`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format:
        /// - local part of letters, digits and `+_.-`, not starting or
        ///   ending with a special character;
        /// - domain of dot-separated labels, the last one at least 2
        ///   characters long.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(concat!(
                r"^[\p{L}\p{N}]([\p{L}\p{N}+_.-]*[\p{L}\p{N}])?@",
                r"([\p{L}\p{N}]([\p{L}\p{N}-]*[\p{L}\p{N}])?\.)*",
                r"[\p{L}\p{N}]([\p{L}\p{N}-]*[\p{L}\p{N}])$",
            ))
            .expect("valid regex")
        });

        REGEX.is_match(address.as_ref())
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

define_kind! {
    #[doc = "Priority of a [`Buyer`]."]
    enum Priority {
        #[doc = "Buyer to be served first."]
        High = 1,

        #[doc = "Regular buyer."]
        Normal = 2,

        #[doc = "Buyer to be served last."]
        Low = 3,
    }
}
