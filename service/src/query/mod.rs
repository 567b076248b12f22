//! [`Query`] definition.

pub mod buyers;
pub mod properties;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    filter::Filter,
    infra::{database, Database},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] listing `T`ypes passing a [`Filter`], in the order they were
/// added to a [`Database`].
#[derive(Clone, Debug)]
pub struct Filtered<T, F>(By<Vec<T>, F>);

impl<T, F> Filtered<T, F> {
    /// Creates a new [`Filtered`] query by the provided [`Filter`].
    #[must_use]
    pub fn by(filter: F) -> Self {
        Self(By::new(filter))
    }
}

impl<Db, T, F> Query<Filtered<T, F>> for Service<Db>
where
    Db: Database<
        Select<By<Vec<T>, ()>>,
        Ok = Vec<T>,
        Err = Traced<database::Error>,
    >,
    F: Filter<T>,
{
    type Ok = Vec<T>;
    type Err = Traced<database::Error>;

    #[tracing::instrument(skip_all)]
    async fn execute(
        &self,
        Filtered(by): Filtered<T, F>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();

        let all = self
            .database()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?;
        let total = all.len();

        let passed = all
            .into_iter()
            .filter(|item| filter.test(item))
            .collect::<Vec<_>>();
        tracing::debug!(total, passed = passed.len(), "filtered");

        Ok(passed)
    }
}
