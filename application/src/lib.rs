//! Application provides a command line interface to the [`Service`].

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod args;
pub mod config;
pub mod error;

use common::Handler as _;
use service::{
    command::{create_buyer, create_property, CreateBuyer, CreateProperty},
    domain::{Buyer, Characteristics, Property},
    filter::{self, Everything},
    query,
};
// Used in binary.
use tokio as _;
use tracing as log;
use tracing_subscriber as _;

pub use self::{args::Args, config::Config, error::Error};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<service::infra::Memory>;

/// Adds the provided [`config::Sample`] contents to the [`Service`].
///
/// Entries duplicating already added ones are skipped with a warning.
///
/// # Errors
///
/// If any of the sample entries is invalid, or the [`Service`] fails to add
/// it.
pub async fn populate(
    service: &Service,
    sample: config::Sample,
) -> Result<(), Error> {
    let config::Sample { properties, buyers } = sample;

    for property in properties {
        let cmd = CreateProperty::try_from(property)?;
        match service.execute(cmd).await {
            Ok(p) => log::debug!("added property `{}`", p.name()),
            Err(e)
                if matches!(
                    e.as_ref(),
                    create_property::ExecutionError::PropertyExists(_),
                ) =>
            {
                log::warn!("skipping sample property: {e}");
            }
            Err(e) => return Err(Error::CreateProperty(e)),
        }
    }

    for buyer in buyers {
        let cmd = CreateBuyer::try_from(buyer)?;
        match service.execute(cmd).await {
            Ok(b) => log::debug!("added buyer `{}`", b.name()),
            Err(e)
                if matches!(
                    e.as_ref(),
                    create_buyer::ExecutionError::BuyerExists(_),
                ) =>
            {
                log::warn!("skipping sample buyer: {e}");
            }
            Err(e) => return Err(Error::CreateBuyer(e)),
        }
    }

    Ok(())
}

/// Lists all the [`Property`]s and [`Buyer`]s of the [`Service`].
///
/// # Errors
///
/// If the [`Service`] fails to query its address book.
pub async fn list_all(
    service: &Service,
) -> Result<(Vec<Property>, Vec<Buyer>), Error> {
    let properties = service
        .execute(query::properties::All::by(Everything))
        .await
        .map_err(Error::Query)?;
    let buyers = service
        .execute(query::buyers::All::by(Everything))
        .await
        .map_err(Error::Query)?;

    Ok((properties, buyers))
}

/// Lists [`Buyer`]s of the [`Service`] desiring all the provided
/// [`Characteristics`].
///
/// # Errors
///
/// If the [`Service`] fails to query its address book.
pub async fn buyers_desiring(
    service: &Service,
    characteristics: Characteristics,
) -> Result<Vec<Buyer>, Error> {
    service
        .execute(query::buyers::ContainingAllCharacteristics::by(
            filter::buyer::ContainingAllCharacteristics::new(characteristics),
        ))
        .await
        .map_err(Error::Query)
}
