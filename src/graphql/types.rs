//! GraphQL output and argument types
//!
//! `Person` wraps the stored record; the nested `address` object is computed
//! from the flat `city`/`street` fields when the response is built, it is
//! never stored.

use crate::persons::{Person as PersonRecord, PhoneFilter};
use async_graphql::{Enum, Object, SimpleObject, ID};

/// Phone-presence filter argument for `allPersons`
#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum YesNo {
    /// Only persons with a phone number
    Yes,
    /// Only persons without a phone number
    No,
}

impl From<YesNo> for PhoneFilter {
    fn from(value: YesNo) -> Self {
        match value {
            YesNo::Yes => PhoneFilter::HasPhone,
            YesNo::No => PhoneFilter::NoPhone,
        }
    }
}

/// Derived address view
#[derive(SimpleObject)]
pub struct Address {
    pub city: Option<String>,
    pub street: Option<String>,
}

/// A person record as exposed by the API
pub struct Person(pub PersonRecord);

#[Object]
impl Person {
    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn age(&self) -> Option<i32> {
        self.0.age
    }

    async fn phone(&self) -> Option<&str> {
        self.0.phone.as_deref()
    }

    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    /// Address projection, recomputed from the record on every read
    async fn address(&self) -> Address {
        Address {
            city: self.0.city.clone(),
            street: self.0.street.clone(),
        }
    }
}
