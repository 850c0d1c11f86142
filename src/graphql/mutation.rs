//! GraphQL mutation resolvers

use crate::error::Error;
use crate::graphql::types::Person;
use crate::persons::{NewPerson, PersonStore};
use async_graphql::{Context, ErrorExtensions, Object, Result};
use std::sync::Arc;

/// Root type for all GraphQL mutations
pub struct Mutation;

#[Object]
impl Mutation {
    /// Add a new person.
    ///
    /// Names are unique; adding an existing name is a user-input error
    /// carrying the offending name in `extensions.invalidArgs`.
    async fn add_person(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: Option<i32>,
        phone: Option<String>,
        city: Option<String>,
        street: Option<String>,
    ) -> Result<Person> {
        let store = ctx.data_unchecked::<Arc<PersonStore>>();

        let candidate = NewPerson {
            name,
            age,
            phone,
            city,
            street,
        };

        let person = store.insert(candidate).await.map_err(|err| match err {
            Error::DuplicateName(name) => async_graphql::Error::new("Name must be unique")
                .extend_with(|_, ext| {
                    ext.set("code", "BAD_USER_INPUT");
                    ext.set("invalidArgs", name.clone());
                }),
            other => async_graphql::Error::new(other.to_string()),
        })?;

        Ok(Person(person))
    }

    /// Replace a person's phone number; null when the name is unknown
    async fn edit_number(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: String,
    ) -> Option<Person> {
        let store = ctx.data_unchecked::<Arc<PersonStore>>();
        store.update_phone(&name, &phone).await.map(Person)
    }
}
