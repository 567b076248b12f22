//! In-memory [`Database`] implementation.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use common::operations::{By, Insert, Select};
use derive_more::{Display, Error as StdError};
use tracerr::Traced;

use crate::{
    domain::{Buyer, Property},
    infra::{database, Database},
};

/// Address book kept in memory.
///
/// Clones share the same contents.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// Listed [`Property`]s in insertion order.
    properties: Arc<RwLock<Vec<Property>>>,

    /// Known [`Buyer`]s in insertion order.
    buyers: Arc<RwLock<Vec<Buyer>>>,
}

impl Memory {
    /// Creates a new empty [`Memory`] address book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Acquires a read guard of the provided `lock`.
fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, Error> {
    lock.read().map_err(|_| Error::Poisoned)
}

/// Acquires a write guard of the provided `lock`.
fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, Error> {
    lock.write().map_err(|_| Error::Poisoned)
}

impl Database<Insert<Property>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(property): Insert<Property>,
    ) -> Result<Self::Ok, Self::Err> {
        write(&self.properties)
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .push(property);
        Ok(())
    }
}

impl Database<Select<By<Vec<Property>, ()>>> for Memory {
    type Ok = Vec<Property>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Property>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(read(&self.properties)
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .clone())
    }
}

impl<'p> Database<Select<By<Option<Property>, &'p Property>>> for Memory {
    type Ok = Option<Property>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Property>, &'p Property>>,
    ) -> Result<Self::Ok, Self::Err> {
        let property = by.into_inner();
        Ok(read(&self.properties)
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .iter()
            .find(|p| p.is_same_property(property))
            .cloned())
    }
}

impl Database<Insert<Buyer>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(buyer): Insert<Buyer>,
    ) -> Result<Self::Ok, Self::Err> {
        write(&self.buyers)
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .push(buyer);
        Ok(())
    }
}

impl Database<Select<By<Vec<Buyer>, ()>>> for Memory {
    type Ok = Vec<Buyer>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Buyer>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(read(&self.buyers)
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .clone())
    }
}

impl<'b> Database<Select<By<Option<Buyer>, &'b Buyer>>> for Memory {
    type Ok = Option<Buyer>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Buyer>, &'b Buyer>>,
    ) -> Result<Self::Ok, Self::Err> {
        let buyer = by.into_inner();
        Ok(read(&self.buyers)
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .iter()
            .find(|b| b.is_same_buyer(buyer))
            .cloned())
    }
}

/// [`Memory`] error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// Lock guarding [`Memory`] contents was poisoned by a panicked writer.
    #[display("`Memory` lock is poisoned")]
    Poisoned,
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{
        operations::{By, Insert, Select},
        Price,
    };

    use crate::{
        domain::{
            property::{Description, Name, Seller},
            Address, Property, Tag,
        },
        infra::Database as _,
    };

    use super::Memory;

    fn property(name: &str, price: &str, seller: &str) -> Property {
        Property::new(
            Name::from_str(name).unwrap(),
            Price::from_str(price).unwrap(),
            Address::from_str("Blk 12 Clementi Road").unwrap(),
            Description::from_str("Corner unit").unwrap(),
            Vec::<Tag>::new(),
            Seller::from(seller),
            None,
        )
    }

    #[tokio::test]
    async fn lists_inserted_in_order() {
        let db = Memory::new();
        let shared = db.clone();

        db.execute(Insert(property("Sunny Villa", "1", "Alice")))
            .await
            .unwrap();
        shared
            .execute(Insert(property("Rainy Villa", "2", "Bob")))
            .await
            .unwrap();

        let listed = db
            .execute(Select(By::<Vec<Property>, _>::new(())))
            .await
            .unwrap();
        let names = listed
            .iter()
            .map(|p| p.name().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Sunny Villa", "Rainy Villa"]);
    }

    #[tokio::test]
    async fn selects_same_property() {
        let db = Memory::new();
        db.execute(Insert(property("Sunny Villa", "1", "Alice")))
            .await
            .unwrap();

        let probe = property("Sunny Villa", "1", "Bob");
        let found = db
            .execute(Select(By::<Option<Property>, _>::new(&probe)))
            .await
            .unwrap();
        assert_eq!(found.unwrap().seller().to_string(), "Alice");

        let probe = property("Sunny Villa", "2", "Alice");
        let missing = db
            .execute(Select(By::<Option<Property>, _>::new(&probe)))
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
