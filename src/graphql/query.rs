//! GraphQL query resolvers

use crate::graphql::types::{Person, YesNo};
use crate::persons::{PersonStore, PhoneFilter};
use crate::upstream::UpstreamClient;
use async_graphql::{Context, ErrorExtensions, Object, Result};
use std::sync::Arc;

/// Root type for all GraphQL queries
pub struct Query;

#[Object]
impl Query {
    /// Number of persons in the store
    async fn person_count(&self, ctx: &Context<'_>) -> usize {
        let store = ctx.data_unchecked::<Arc<PersonStore>>();
        store.count().await
    }

    /// All persons, optionally filtered by phone presence.
    ///
    /// Reads the remote directory instead of the local store when an
    /// upstream URL is configured.
    async fn all_persons(
        &self,
        ctx: &Context<'_>,
        phone: Option<YesNo>,
    ) -> Result<Vec<Person>> {
        let filter = phone.map(PhoneFilter::from);

        let upstream = ctx.data_unchecked::<Option<Arc<UpstreamClient>>>();
        let records = match upstream {
            Some(client) => {
                let mut records = client.fetch_persons().await.map_err(|e| {
                    e.extend_with(|_, ext| ext.set("code", "UPSTREAM_ERROR"))
                })?;
                if let Some(filter) = filter {
                    records.retain(|p| filter.matches(p));
                }
                records
            }
            None => {
                let store = ctx.data_unchecked::<Arc<PersonStore>>();
                store.list(filter).await
            }
        };

        Ok(records.into_iter().map(Person).collect())
    }

    /// Find a person by exact name; null when absent
    async fn find_person(&self, ctx: &Context<'_>, name: String) -> Option<Person> {
        let store = ctx.data_unchecked::<Arc<PersonStore>>();
        store.find_by_name(&name).await.map(Person)
    }

    /// All persons living in the given city (exact match, possibly empty)
    async fn find_by_city(&self, ctx: &Context<'_>, city: String) -> Vec<Person> {
        let store = ctx.data_unchecked::<Arc<PersonStore>>();
        store
            .find_by_city(&city)
            .await
            .into_iter()
            .map(Person)
            .collect()
    }
}
