//! [`Command`] for creating a new [`Property`].

use std::collections::BTreeSet;

use common::{
    operations::{By, Insert, Select},
    Price,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{property, Address, Characteristics, Property, Tag},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Property`].
#[derive(Clone, Debug)]
pub struct CreateProperty {
    /// [`property::Name`] of a new [`Property`].
    pub name: property::Name,

    /// [`Price`] of a new [`Property`].
    pub price: Price,

    /// [`Address`] of a new [`Property`].
    pub address: Address,

    /// [`property::Description`] of a new [`Property`].
    pub description: property::Description,

    /// [`Tag`]s of a new [`Property`].
    pub tags: BTreeSet<Tag>,

    /// [`property::Seller`] of a new [`Property`].
    pub seller: property::Seller,

    /// [`Characteristics`] of a new [`Property`], if any.
    pub characteristics: Option<Characteristics>,
}

impl<Db> Command<CreateProperty> for Service<Db>
where
    Db: for<'l> Database<
            Select<By<Option<Property>, &'l Property>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<Insert<Property>, Err = Traced<database::Error>>,
{
    type Ok = Property;
    type Err = Traced<ExecutionError>;

    #[tracing::instrument(
        skip_all,
        fields(property.name = %cmd.name, property.price = %cmd.price),
    )]
    async fn execute(
        &self,
        cmd: CreateProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateProperty {
            name,
            price,
            address,
            description,
            tags,
            seller,
            characteristics,
        } = cmd;

        let property = Property::new(
            name,
            price,
            address,
            description,
            tags,
            seller,
            characteristics,
        );

        let existing = self
            .database()
            .execute(Select(By::new(&property)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if let Some(existing) = existing {
            return Err(tracerr::new!(E::PropertyExists(
                existing.name().clone()
            )));
        }

        self.database()
            .execute(Insert(property.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tracing::debug!(digest = %property.digest(), "`Property` created");

        Ok(property)
    }
}

/// Error of [`CreateProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Property`] with the same name and price already exists.
    #[display("`{_0}` property with the same price already exists")]
    PropertyExists(#[error(not(source))] property::Name),
}

#[cfg(test)]
mod spec {
    use std::{collections::BTreeSet, str::FromStr as _};

    use common::Price;

    use crate::{
        command::Command as _,
        domain::{
            property::{Description, Name, Seller},
            Address, Characteristics, Tag,
        },
        infra::Memory,
        Service,
    };

    use super::{CreateProperty, ExecutionError};

    fn cmd(name: &str, price: &str) -> CreateProperty {
        CreateProperty {
            name: Name::from_str(name).unwrap(),
            price: Price::from_str(price).unwrap(),
            address: Address::from_str("Blk 12 Clementi Road").unwrap(),
            description: Description::from_str("Corner unit").unwrap(),
            tags: BTreeSet::from([Tag::from_str("freehold").unwrap()]),
            seller: Seller::from("Alice Pauline"),
            characteristics: Some(Characteristics::from_str("Pool").unwrap()),
        }
    }

    #[tokio::test]
    async fn creates_property() {
        let service = Service::new(Memory::new());

        let created =
            service.execute(cmd("Sunny Villa", "350000")).await.unwrap();

        assert_eq!(created.name().to_string(), "Sunny Villa");
        assert_eq!(created.tags().len(), 1);
        assert!(created.characteristics().is_some());
    }

    #[tokio::test]
    async fn rejects_same_name_and_price() {
        let service = Service::new(Memory::new());
        _ = service.execute(cmd("Sunny Villa", "350000")).await.unwrap();

        let mut duplicate = cmd("Sunny Villa", "350000");
        duplicate.seller = Seller::from("Bob");
        duplicate.characteristics = None;

        let err = service.execute(duplicate).await.unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::PropertyExists(name) if name.to_string() == "Sunny Villa",
        ));

        assert!(service.execute(cmd("Sunny Villa", "360000")).await.is_ok());
    }
}
