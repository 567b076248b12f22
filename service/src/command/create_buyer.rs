//! [`Command`] for creating a new [`Buyer`].

use common::{
    operations::{By, Insert, Select},
    PriceRange,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{buyer, Address, Buyer, Characteristics},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Buyer`].
#[derive(Clone, Debug)]
pub struct CreateBuyer {
    /// [`buyer::Name`] of a new [`Buyer`].
    pub name: buyer::Name,

    /// [`buyer::Phone`] of a new [`Buyer`].
    pub phone: buyer::Phone,

    /// [`buyer::Email`] of a new [`Buyer`].
    pub email: buyer::Email,

    /// [`Address`] of a new [`Buyer`].
    pub address: Address,

    /// [`PriceRange`] of a new [`Buyer`], if known.
    pub price_range: Option<PriceRange>,

    /// [`Characteristics`] desired by a new [`Buyer`], if known.
    pub desired_characteristics: Option<Characteristics>,

    /// [`buyer::Priority`] of a new [`Buyer`].
    pub priority: buyer::Priority,
}

impl<Db> Command<CreateBuyer> for Service<Db>
where
    Db: for<'l> Database<
            Select<By<Option<Buyer>, &'l Buyer>>,
            Ok = Option<Buyer>,
            Err = Traced<database::Error>,
        > + Database<Insert<Buyer>, Err = Traced<database::Error>>,
{
    type Ok = Buyer;
    type Err = Traced<ExecutionError>;

    #[tracing::instrument(skip_all, fields(buyer.name = %cmd.name))]
    async fn execute(&self, cmd: CreateBuyer) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBuyer {
            name,
            phone,
            email,
            address,
            price_range,
            desired_characteristics,
            priority,
        } = cmd;

        let buyer = Buyer::new(
            name,
            phone,
            email,
            address,
            price_range,
            desired_characteristics,
            priority,
        );

        let existing = self
            .database()
            .execute(Select(By::new(&buyer)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if existing.is_some() {
            return Err(tracerr::new!(E::BuyerExists(buyer.name().clone())));
        }

        self.database()
            .execute(Insert(buyer.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tracing::debug!("`Buyer` created");

        Ok(buyer)
    }
}

/// Error of [`CreateBuyer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Buyer`] with the same name already exists.
    #[display("`{_0}` buyer already exists")]
    BuyerExists(#[error(not(source))] buyer::Name),
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use crate::{
        command::Command as _,
        domain::{
            buyer::{Email, Name, Phone, Priority},
            Address,
        },
        infra::Memory,
        Service,
    };

    use super::{CreateBuyer, ExecutionError};

    fn cmd(name: &str, phone: &str) -> CreateBuyer {
        CreateBuyer {
            name: Name::from_str(name).unwrap(),
            phone: Phone::from_str(phone).unwrap(),
            email: Email::from_str("buyer@example.com").unwrap(),
            address: Address::from_str("Blk 30 Geylang Street 29").unwrap(),
            price_range: None,
            desired_characteristics: None,
            priority: Priority::Normal,
        }
    }

    #[tokio::test]
    async fn rejects_same_name() {
        let service = Service::new(Memory::new());

        let created = service.execute(cmd("Alice", "91234567")).await.unwrap();
        assert_eq!(created.phone().to_string(), "91234567");

        let err = service
            .execute(cmd("Alice", "98765432"))
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::BuyerExists(_)));

        assert!(service.execute(cmd("Bob", "91234567")).await.is_ok());
    }
}
