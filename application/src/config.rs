//! [`Config`]-related definitions.

use std::{collections::BTreeSet, fmt, str::FromStr};

use common::{Price, PriceRange};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::{
    command::{CreateBuyer, CreateProperty},
    domain::{buyer, property, Address, Characteristics, Tag},
};

use crate::Error;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Log configuration.
    #[serde(default)]
    pub log: Log,

    /// Sample address book contents.
    #[serde(default)]
    pub sample: Sample,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// Address book contents loaded on start.
///
/// Values are kept as text and validated while being added.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Sample {
    /// Sample properties.
    pub properties: Vec<Property>,

    /// Sample buyers.
    pub buyers: Vec<Buyer>,
}

/// Sample property.
#[derive(Clone, Debug, Deserialize)]
pub struct Property {
    /// Name of the property.
    pub name: String,

    /// Price of the property.
    pub price: String,

    /// Address of the property.
    pub address: String,

    /// Description of the property.
    pub description: String,

    /// Seller of the property.
    pub seller: String,

    /// Tags of the property.
    #[serde(default)]
    pub tags: Vec<String>,

    /// `;`-separated characteristics of the property.
    #[serde(default)]
    pub characteristics: Option<String>,
}

impl TryFrom<Property> for CreateProperty {
    type Error = Error;

    fn try_from(value: Property) -> Result<Self, Self::Error> {
        const ENTITY: &str = "property";

        let Property {
            name,
            price,
            address,
            description,
            seller,
            tags,
            characteristics,
        } = value;

        Ok(Self {
            name: parse::<property::Name>(ENTITY, "name", &name)?,
            price: parse::<Price>(ENTITY, "price", &price)?,
            address: parse::<Address>(ENTITY, "address", &address)?,
            description: parse::<property::Description>(
                ENTITY,
                "description",
                &description,
            )?,
            tags: tags
                .iter()
                .map(|t| parse::<Tag>(ENTITY, "tag", t))
                .collect::<Result<BTreeSet<_>, _>>()?,
            seller: property::Seller::from(seller),
            characteristics: characteristics
                .as_deref()
                .map(|c| parse::<Characteristics>(ENTITY, "characteristics", c))
                .transpose()?,
        })
    }
}

/// Sample buyer.
#[derive(Clone, Debug, Deserialize)]
pub struct Buyer {
    /// Name of the buyer.
    pub name: String,

    /// Phone number of the buyer.
    pub phone: String,

    /// Email address of the buyer.
    pub email: String,

    /// Address of the buyer.
    pub address: String,

    /// Price range of the buyer in `{lower} - {upper}` format.
    #[serde(default)]
    pub price_range: Option<String>,

    /// `;`-separated characteristics desired by the buyer.
    #[serde(default)]
    pub characteristics: Option<String>,

    /// Priority of the buyer, `NORMAL` if omitted.
    #[serde(default)]
    pub priority: Option<String>,
}

impl TryFrom<Buyer> for CreateBuyer {
    type Error = Error;

    fn try_from(value: Buyer) -> Result<Self, Self::Error> {
        const ENTITY: &str = "buyer";

        let Buyer {
            name,
            phone,
            email,
            address,
            price_range,
            characteristics,
            priority,
        } = value;

        Ok(Self {
            name: parse::<buyer::Name>(ENTITY, "name", &name)?,
            phone: parse::<buyer::Phone>(ENTITY, "phone", &phone)?,
            email: parse::<buyer::Email>(ENTITY, "email", &email)?,
            address: parse::<Address>(ENTITY, "address", &address)?,
            price_range: price_range
                .as_deref()
                .map(|r| parse::<PriceRange>(ENTITY, "price_range", r))
                .transpose()?,
            desired_characteristics: characteristics
                .as_deref()
                .map(|c| parse::<Characteristics>(ENTITY, "characteristics", c))
                .transpose()?,
            priority: priority
                .as_deref()
                .map(|p| parse::<buyer::Priority>(ENTITY, "priority", p))
                .transpose()?
                .unwrap_or(buyer::Priority::Normal),
        })
    }
}

/// Parses the provided sample `value` of an `entity` `field`.
fn parse<T>(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<T, Error>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    T::from_str(value).map_err(|e| Error::InvalidSample {
        entity,
        field,
        value: value.to_owned(),
        reason: e.to_string(),
    })
}
