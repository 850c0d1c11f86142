//! Rolodex - GraphQL person directory service
//!
//! A small service exposing an in-memory collection of person records
//! through a GraphQL API: count, list (with an optional phone-presence
//! filter), find by name or city, add, and edit phone numbers.
//!
//! ## Architecture
//!
//! ```text
//! client ── POST /graphql ──> server (axum)
//!                               │
//!                               ▼
//!                         graphql (async-graphql schema)
//!                          Query / Mutation resolvers
//!                               │
//!                ┌──────────────┴──────────────┐
//!                ▼                             ▼
//!        persons::PersonStore          upstream::UpstreamClient
//!        (authoritative local list)    (remote directory, opt-in,
//!                                       allPersons only)
//! ```
//!
//! Each GraphQL operation maps to exactly one store call; the nested
//! `address` object on every person response is computed from the record's
//! flat `city`/`street` fields when the response is built.
//!
//! ## Modules
//!
//! - [`graphql`]: schema, resolvers, and output types
//! - [`persons`]: person records and the in-memory store
//! - [`server`]: axum application and serving lifecycle
//! - [`upstream`]: client for the optional remote directory
//! - [`config`]: configuration management

pub mod config;
pub mod error;
pub mod graphql;
pub mod persons;
pub mod server;
pub mod upstream;

pub use config::RolodexConfig;
pub use error::{Error, Result};
