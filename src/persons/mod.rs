//! Person records and the in-memory store
//!
//! The store owns the authoritative list of person records. The GraphQL
//! layer is handed an `Arc<PersonStore>` and translates each operation into
//! exactly one store call.

pub mod store;
pub mod types;

pub use store::PersonStore;
pub use types::{NewPerson, Person, PhoneFilter};
