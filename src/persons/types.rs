//! Person record wire types
//!
//! `Person` is both the stored record and the wire shape used for seed files
//! and the remote directory, so everything except `name` is serde-defaulted.

use serde::{Deserialize, Serialize};

/// A single person record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique within the store
    pub name: String,

    #[serde(default)]
    pub age: Option<i32>,

    #[serde(default)]
    pub phone: Option<String>,

    /// Assigned by the store at creation, never reassigned. Seed and remote
    /// records may omit it; the store fills it in at load time.
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub street: Option<String>,
}

impl Person {
    /// Whether this record has a usable phone number (set and non-empty)
    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().map_or(false, |p| !p.is_empty())
    }
}

/// Candidate for insertion; the store assigns the id
#[derive(Debug, Clone, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
}

/// Phone-presence filter for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneFilter {
    /// Only records with a non-empty phone
    HasPhone,
    /// Only records with an absent or empty phone
    NoPhone,
}

impl PhoneFilter {
    /// Whether a record passes this filter
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PhoneFilter::HasPhone => person.has_phone(),
            PhoneFilter::NoPhone => !person.has_phone(),
        }
    }
}
