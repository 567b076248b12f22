//! [`Error`]-related definitions.

use derive_more::{Display, Error as StdError};
use service::{
    command::{create_buyer, create_property},
    infra::database,
};
use tracerr::Traced;

/// Application error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Sample address book contents are invalid.
    #[display("invalid {entity} `{field}` `{value}`: {reason}")]
    InvalidSample {
        /// Kind of the sample entity.
        entity: &'static str,

        /// Name of the invalid field.
        field: &'static str,

        /// Invalid value.
        value: String,

        /// Reason of the value being invalid.
        reason: String,
    },

    /// Sample property couldn't be added.
    #[display("failed to add sample property: {_0}")]
    CreateProperty(Traced<create_property::ExecutionError>),

    /// Sample buyer couldn't be added.
    #[display("failed to add sample buyer: {_0}")]
    CreateBuyer(Traced<create_buyer::ExecutionError>),

    /// Address book couldn't be queried.
    #[display("failed to query address book: {_0}")]
    Query(Traced<database::Error>),
}
