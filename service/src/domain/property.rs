//! [`Property`] definitions.

use std::{collections::BTreeSet, fmt, str::FromStr, sync::LazyLock};

use common::Price;
use derive_more::{AsRef, Display, From, Into};
use regex::Regex;
use uuid::Uuid;
use xxhash_rust::xxh3;

use crate::domain::{Address, Characteristics, Tag};

/// Realty listed for sale.
///
/// Immutable once created: changing any field requires creating a new
/// [`Property`].
#[derive(Clone, Debug)]
pub struct Property {
    /// [`Name`] of this [`Property`].
    name: Name,

    /// [`Price`] this [`Property`] is listed for.
    price: Price,

    /// [`Address`] of this [`Property`].
    address: Address,

    /// [`Description`] of this [`Property`].
    description: Description,

    /// [`Tag`]s of this [`Property`].
    tags: BTreeSet<Tag>,

    /// [`Seller`] of this [`Property`].
    seller: Seller,

    /// [`Characteristics`] of this [`Property`], if specified.
    characteristics: Option<Characteristics>,
}

impl Property {
    /// Creates a new [`Property`] out of the provided validated fields.
    #[must_use]
    pub fn new(
        name: Name,
        price: Price,
        address: Address,
        description: Description,
        tags: impl IntoIterator<Item = Tag>,
        seller: Seller,
        characteristics: Option<Characteristics>,
    ) -> Self {
        Self {
            name,
            price,
            address,
            description,
            tags: tags.into_iter().collect(),
            seller,
            characteristics,
        }
    }

    /// Returns [`Name`] of this [`Property`].
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns [`Price`] of this [`Property`].
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns [`Address`] of this [`Property`].
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns [`Description`] of this [`Property`].
    #[must_use]
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Returns [`Tag`]s of this [`Property`].
    ///
    /// The returned set is read-only:
    ///
    /// ```compile_fail
    /// # use service::domain::{Property, Tag};
    /// fn retag(property: &Property, tag: Tag) {
    ///     property.tags().insert(tag);
    /// }
    /// ```
    #[must_use]
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns [`Seller`] of this [`Property`].
    #[must_use]
    pub fn seller(&self) -> &Seller {
        &self.seller
    }

    /// Returns [`Characteristics`] of this [`Property`], if specified.
    #[must_use]
    pub fn characteristics(&self) -> Option<&Characteristics> {
        self.characteristics.as_ref()
    }

    /// Checks whether this [`Property`] has the same [`Name`] and [`Price`] as
    /// the `other` one.
    ///
    /// This is a weaker notion of equality, used for detecting duplicates.
    #[must_use]
    pub fn is_same_property(&self, other: &Self) -> bool {
        self.name == other.name && self.price == other.price
    }

    /// Checks whether this [`Property`] has the same data as the `other` one.
    ///
    /// Every field except [`Tag`]s is compared.
    #[must_use]
    pub fn has_same_data(&self, other: &Self) -> bool {
        self.is_same_property(other)
            && self.address == other.address
            && self.description == other.description
            && self.seller == other.seller
            && self.characteristics == other.characteristics
    }

    /// Calculates the [`Hash`] of this [`Property`].
    ///
    /// Unlike [`Property::has_same_data()`], it takes [`Tag`]s into account
    /// and ignores [`Characteristics`].
    ///
    /// [`Hash`]: struct@Hash
    #[must_use]
    pub fn digest(&self) -> Hash {
        Hash::new(
            &self.name,
            self.price,
            &self.address,
            &self.description,
            &self.tags,
            &self.seller,
        )
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.has_same_data(other)
    }
}

impl Eq for Property {}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            name,
            price,
            address,
            description,
            tags,
            seller,
            characteristics,
        } = self;

        write!(
            f,
            "{name}; Address: {address}; Price: {price}; \
             Description: {description}; Seller: {seller}; \
             Characteristics: ",
        )?;
        match characteristics {
            Some(c) => write!(f, "{c}")?,
            None => write!(f, "Not Specified")?,
        }

        if !tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in tags {
                write!(f, "[{tag}]")?;
            }
        }
        Ok(())
    }
}

/// Hash of a [`Property`] data.
#[derive(Clone, Copy, Debug, Display, Eq, From, Hash, Into, PartialEq)]
pub struct Hash(Uuid);

impl Hash {
    /// Calculates a new [`Hash`] out of [`Property`] fields.
    ///
    /// [`Hash`]: struct@Hash
    #[must_use]
    pub fn new(
        name: &Name,
        price: Price,
        address: &Address,
        description: &Description,
        tags: &BTreeSet<Tag>,
        seller: &Seller,
    ) -> Self {
        use std::hash::Hash as _;

        // WARNING: Avoid changing the order of the fields in the hasher,
        //          because it changes every calculated hash.
        let mut hasher = xxh3::Xxh3Builder::new().build();
        name.hash(&mut hasher);
        price.hash(&mut hasher);
        address.hash(&mut hasher);
        description.hash(&mut hasher);
        tags.hash(&mut hasher);
        seller.hash(&mut hasher);

        Self(Uuid::from_u128(hasher.digest128()))
    }
}

/// Name of a [`Property`].
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
        /// - Must start with a letter or a digit;
        /// - Must consist of letters, digits and spaces only;
        /// - Must not end with a space;
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

/// Description of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`] if the given `description` is valid.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Option<Self> {
        let description = description.into();
        Self::check(&description).then_some(Self(description))
    }

    /// Checks whether the given `description` is a valid [`Description`].
    fn check(description: impl AsRef<str>) -> bool {
        let description = description.as_ref();
        description.trim() == description
            && !description.is_empty()
            && description.len() <= 2048
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

/// Seller of a [`Property`].
///
/// Any text is accepted.
// TODO: Reference a seller contact once sellers are stored in the address
//       book alongside buyers.
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, PartialEq)]
#[as_ref(forward)]
#[from(&str, String)]
pub struct Seller(String);

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Price;

    use crate::domain::{Address, Characteristics, Tag};

    use super::{Description, Name, Property, Seller};

    fn property(name: &str, price: &str) -> Property {
        Property::new(
            Name::from_str(name).unwrap(),
            Price::from_str(price).unwrap(),
            Address::from_str("Blk 12 Clementi Road").unwrap(),
            Description::from_str("Corner unit").unwrap(),
            [Tag::from_str("freehold").unwrap()],
            Seller::from("Alice Pauline"),
            Some(Characteristics::from_str("Pool; Garage").unwrap()),
        )
    }

    fn retagged(p: &Property, tags: &[&str]) -> Property {
        Property::new(
            p.name().clone(),
            p.price(),
            p.address().clone(),
            p.description().clone(),
            tags.iter().map(|t| Tag::from_str(t).unwrap()),
            p.seller().clone(),
            p.characteristics().cloned(),
        )
    }

    #[test]
    fn accessors_return_provided_values() {
        let p = Property::new(
            Name::from_str("Sunny Villa").unwrap(),
            Price::from_str("350000").unwrap(),
            Address::from_str("Blk 12 Clementi Road").unwrap(),
            Description::from_str("Corner unit").unwrap(),
            [
                Tag::from_str("freehold").unwrap(),
                Tag::from_str("freehold").unwrap(),
                Tag::from_str("new").unwrap(),
            ],
            Seller::from("Alice Pauline"),
            None,
        );

        assert_eq!(p.name().to_string(), "Sunny Villa");
        assert_eq!(p.price(), Price::from_str("350000").unwrap());
        assert_eq!(p.address().to_string(), "Blk 12 Clementi Road");
        assert_eq!(p.description().to_string(), "Corner unit");
        assert_eq!(p.seller().to_string(), "Alice Pauline");
        assert_eq!(p.tags().len(), 2);
        assert!(p.tags().contains(&Tag::from_str("new").unwrap()));
        assert!(p.characteristics().is_none());
    }

    #[test]
    fn same_property_by_name_and_price() {
        let p = property("Sunny Villa", "350000");
        assert!(p.is_same_property(&p));

        let other = Property::new(
            p.name().clone(),
            p.price(),
            Address::from_str("Blk 1 Other Road").unwrap(),
            Description::from_str("Other").unwrap(),
            Vec::<Tag>::new(),
            Seller::from("Bob"),
            None,
        );
        assert!(p.is_same_property(&other));
        assert!(!p.has_same_data(&other));

        assert!(!p.is_same_property(&property("Sunny Villa", "350001")));
        assert!(!p.is_same_property(&property("Rainy Villa", "350000")));

        let missing: Option<&Property> = None;
        assert!(!missing.is_some_and(|m| p.is_same_property(m)));
    }

    #[test]
    fn full_equality_ignores_tags_but_digest_does_not() {
        let p = property("Sunny Villa", "350000");
        let q = retagged(&p, &["leasehold"]);

        assert!(p.has_same_data(&q));
        assert_eq!(p, q);
        assert_ne!(p.digest(), q.digest());

        assert_eq!(p.digest(), retagged(&p, &["freehold"]).digest());
    }

    #[test]
    fn full_equality_compares_characteristics() {
        let p = property("Sunny Villa", "350000");
        let q = Property::new(
            p.name().clone(),
            p.price(),
            p.address().clone(),
            p.description().clone(),
            p.tags().iter().cloned(),
            p.seller().clone(),
            None,
        );

        assert_ne!(p, q);
        assert!(p.is_same_property(&q));
        assert_eq!(p.digest(), q.digest());
    }

    #[test]
    fn displays_every_field() {
        let p = property("Sunny Villa", "350000");
        assert_eq!(
            p.to_string(),
            "Sunny Villa; Address: Blk 12 Clementi Road; Price: 350000; \
             Description: Corner unit; Seller: Alice Pauline; \
             Characteristics: Garage; Pool; Tags: [freehold]",
        );

        let bare = Property::new(
            p.name().clone(),
            p.price(),
            p.address().clone(),
            p.description().clone(),
            Vec::<Tag>::new(),
            p.seller().clone(),
            None,
        );
        assert_eq!(
            bare.to_string(),
            "Sunny Villa; Address: Blk 12 Clementi Road; Price: 350000; \
             Description: Corner unit; Seller: Alice Pauline; \
             Characteristics: Not Specified",
        );
    }

    #[test]
    fn validates_name() {
        assert!(Name::new("Sunny Villa 2").is_some());
        assert!(Name::new("A").is_some());

        assert!(Name::new("").is_none());
        assert!(Name::new(" Villa").is_none());
        assert!(Name::new("Villa ").is_none());
        assert!(Name::new("Villa #2").is_none());
    }
}
