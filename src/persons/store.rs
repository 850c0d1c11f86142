//! In-memory person store
//!
//! Holds the authoritative list of person records behind a `RwLock`. Insert
//! and phone updates run their read-modify-write sequences entirely under
//! the write lock, so name uniqueness holds under concurrent requests.

use crate::error::{Error, Result};
use crate::persons::types::{NewPerson, Person, PhoneFilter};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory person store
pub struct PersonStore {
    persons: Arc<RwLock<Vec<Person>>>,
}

impl Default for PersonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            persons: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-populated with records.
    ///
    /// Records without an id get a fresh one; duplicate names are rejected.
    pub fn with_records(mut records: Vec<Person>) -> Result<Self> {
        for record in &mut records {
            if record.id.is_empty() {
                record.id = Uuid::new_v4().to_string();
            }
        }

        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|p| p.name == record.name) {
                return Err(Error::DuplicateName(record.name.clone()));
            }
        }

        Ok(Self {
            persons: Arc::new(RwLock::new(records)),
        })
    }

    /// Load a store from a JSON seed file (an array of person records)
    pub async fn from_seed_file(path: &Path) -> Result<Self> {
        let data = tokio::fs::read_to_string(path).await?;
        let records: Vec<Person> = serde_json::from_str(&data)?;
        tracing::info!(count = records.len(), "Loaded seed records from {}", path.display());
        Self::with_records(records)
    }

    /// Current number of records
    pub async fn count(&self) -> usize {
        self.persons.read().await.len()
    }

    /// List all records, or only those passing the phone-presence filter
    pub async fn list(&self, filter: Option<PhoneFilter>) -> Vec<Person> {
        let persons = self.persons.read().await;
        match filter {
            Some(filter) => persons.iter().filter(|p| filter.matches(p)).cloned().collect(),
            None => persons.clone(),
        }
    }

    /// Find a record by exact name
    pub async fn find_by_name(&self, name: &str) -> Option<Person> {
        self.persons.read().await.iter().find(|p| p.name == name).cloned()
    }

    /// All records whose city exactly matches (case-sensitive)
    pub async fn find_by_city(&self, city: &str) -> Vec<Person> {
        self.persons
            .read()
            .await
            .iter()
            .filter(|p| p.city.as_deref() == Some(city))
            .cloned()
            .collect()
    }

    /// Insert a new record, assigning a fresh unique id.
    ///
    /// Fails with `Error::DuplicateName` if the name is already taken; the
    /// store is left unchanged in that case.
    pub async fn insert(&self, candidate: NewPerson) -> Result<Person> {
        let mut persons = self.persons.write().await;

        if persons.iter().any(|p| p.name == candidate.name) {
            return Err(Error::DuplicateName(candidate.name));
        }

        let person = Person {
            name: candidate.name,
            age: candidate.age,
            phone: candidate.phone,
            id: Uuid::new_v4().to_string(),
            city: candidate.city,
            street: candidate.street,
        };

        persons.push(person.clone());
        Ok(person)
    }

    /// Replace the phone number of the record with the given name.
    ///
    /// Returns `None` (not an error) when no record matches; otherwise the
    /// record is replaced in place by a copy differing only in `phone`.
    pub async fn update_phone(&self, name: &str, phone: &str) -> Option<Person> {
        let mut persons = self.persons.write().await;

        let index = persons.iter().position(|p| p.name == name)?;

        let updated = Person {
            phone: Some(phone.to_string()),
            ..persons[index].clone()
        };
        persons[index] = updated.clone();
        Some(updated)
    }
}
