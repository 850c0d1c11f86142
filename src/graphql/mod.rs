//! GraphQL API for the person directory
//!
//! # Example operations
//!
//! ```graphql
//! query {
//!   personCount
//!   allPersons(phone: YES) { name phone }
//!   findPerson(name: "Ada") { id address { city street } }
//!   findByCity(city: "London") { name }
//! }
//!
//! mutation {
//!   addPerson(name: "Ada", city: "London", street: "Main") { id }
//!   editNumber(name: "Ada", phone: "040-123456") { name phone }
//! }
//! ```

pub mod mutation;
pub mod query;
pub mod types;

use crate::persons::PersonStore;
use crate::upstream::UpstreamClient;
use async_graphql::{EmptySubscription, Schema};
use mutation::Mutation;
use query::Query;
use std::sync::Arc;

/// The Rolodex GraphQL schema type
pub type RolodexSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the GraphQL schema with the store (and optional remote directory
/// client) as context data
pub fn build_schema(
    store: Arc<PersonStore>,
    upstream: Option<Arc<UpstreamClient>>,
) -> RolodexSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(store)
        .data(upstream)
        .limit_depth(8)
        .limit_complexity(200)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn make_schema() -> RolodexSchema {
        build_schema(Arc::new(PersonStore::new()), None)
    }

    async fn execute(schema: &RolodexSchema, operation: &str) -> Value {
        serde_json::to_value(schema.execute(operation).await).unwrap()
    }

    #[tokio::test]
    async fn test_person_count_starts_at_zero() {
        let schema = make_schema();
        let json = execute(&schema, "{ personCount }").await;
        assert_eq!(json["data"]["personCount"], 0);
    }

    #[tokio::test]
    async fn test_add_person_returns_id_and_address() {
        let schema = make_schema();

        let json = execute(
            &schema,
            r#"mutation {
                addPerson(name: "Ada", city: "London", street: "Main") {
                    name
                    id
                    address { city street }
                }
            }"#,
        )
        .await;

        let person = &json["data"]["addPerson"];
        assert_eq!(person["name"], "Ada");
        assert!(!person["id"].as_str().unwrap().is_empty());
        assert_eq!(person["address"]["city"], "London");
        assert_eq!(person["address"]["street"], "Main");

        let json = execute(&schema, "{ personCount }").await;
        assert_eq!(json["data"]["personCount"], 1);

        // The same record is found again by name
        let json = execute(
            &schema,
            r#"{ findPerson(name: "Ada") { name address { city } } }"#,
        )
        .await;
        assert_eq!(json["data"]["findPerson"]["name"], "Ada");
        assert_eq!(json["data"]["findPerson"]["address"]["city"], "London");
    }

    #[tokio::test]
    async fn test_add_person_duplicate_name_is_user_input_error() {
        let schema = make_schema();

        execute(
            &schema,
            r#"mutation { addPerson(name: "Ada", city: "London") { id } }"#,
        )
        .await;

        let json = execute(
            &schema,
            r#"mutation { addPerson(name: "Ada", city: "Paris") { id } }"#,
        )
        .await;

        let error = &json["errors"][0];
        assert_eq!(error["message"], "Name must be unique");
        assert_eq!(error["extensions"]["code"], "BAD_USER_INPUT");
        assert_eq!(error["extensions"]["invalidArgs"], "Ada");

        // The failed insert left the store unchanged
        let json = execute(&schema, "{ personCount }").await;
        assert_eq!(json["data"]["personCount"], 1);
    }

    #[tokio::test]
    async fn test_add_person_generates_distinct_ids() {
        let schema = make_schema();

        let first = execute(
            &schema,
            r#"mutation { addPerson(name: "Ada") { id } }"#,
        )
        .await;
        let second = execute(
            &schema,
            r#"mutation { addPerson(name: "Grace") { id } }"#,
        )
        .await;

        let id1 = first["data"]["addPerson"]["id"].as_str().unwrap();
        let id2 = second["data"]["addPerson"]["id"].as_str().unwrap();
        assert_ne!(id1, id2);

        let json = execute(&schema, "{ personCount }").await;
        assert_eq!(json["data"]["personCount"], 2);
    }

    #[tokio::test]
    async fn test_find_person_unknown_is_null() {
        let schema = make_schema();
        let json = execute(&schema, r#"{ findPerson(name: "Nobody") { name } }"#).await;
        assert!(json["data"]["findPerson"].is_null());
        assert!(json.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_edit_number() {
        let schema = make_schema();

        let added = execute(
            &schema,
            r#"mutation { addPerson(name: "Ada", phone: "040-123456", city: "London") { id } }"#,
        )
        .await;
        let original_id = added["data"]["addPerson"]["id"].as_str().unwrap().to_string();

        // Unknown name is a null result, not an error
        let json = execute(
            &schema,
            r#"mutation { editNumber(name: "Nobody", phone: "123") { name } }"#,
        )
        .await;
        assert!(json["data"]["editNumber"].is_null());
        assert!(json.get("errors").is_none());

        // Known name replaces only the phone
        let json = execute(
            &schema,
            r#"mutation {
                editNumber(name: "Ada", phone: "040-999999") {
                    id
                    phone
                    address { city }
                }
            }"#,
        )
        .await;
        let edited = &json["data"]["editNumber"];
        assert_eq!(edited["phone"], "040-999999");
        assert_eq!(edited["id"], original_id.as_str());
        assert_eq!(edited["address"]["city"], "London");
    }

    #[tokio::test]
    async fn test_find_by_city() {
        let schema = make_schema();

        for op in [
            r#"mutation { addPerson(name: "Ada", city: "London") { id } }"#,
            r#"mutation { addPerson(name: "Grace", city: "London") { id } }"#,
            r#"mutation { addPerson(name: "Linus", city: "Helsinki") { id } }"#,
        ] {
            execute(&schema, op).await;
        }

        let json = execute(&schema, r#"{ findByCity(city: "London") { name } }"#).await;
        let names: Vec<&str> = json["data"]["findByCity"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Ada", "Grace"]);

        // No match is an empty list, not null
        let json = execute(&schema, r#"{ findByCity(city: "Oslo") { name } }"#).await;
        assert_eq!(json["data"]["findByCity"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_all_persons_phone_filter() {
        let schema = make_schema();

        for op in [
            r#"mutation { addPerson(name: "Ada", phone: "040-123456") { id } }"#,
            r#"mutation { addPerson(name: "Grace") { id } }"#,
        ] {
            execute(&schema, op).await;
        }

        let json = execute(&schema, "{ allPersons { name } }").await;
        assert_eq!(json["data"]["allPersons"].as_array().unwrap().len(), 2);

        let json = execute(&schema, "{ allPersons(phone: YES) { name } }").await;
        let with_phone = json["data"]["allPersons"].as_array().unwrap();
        assert_eq!(with_phone.len(), 1);
        assert_eq!(with_phone[0]["name"], "Ada");

        let json = execute(&schema, "{ allPersons(phone: NO) { name } }").await;
        let without = json["data"]["allPersons"].as_array().unwrap();
        assert_eq!(without.len(), 1);
        assert_eq!(without[0]["name"], "Grace");
    }

    mod upstream_source {
        use super::*;
        use crate::config::UpstreamConfig;
        use axum::{routing::get, Json, Router};

        async fn spawn_directory(router: Router) -> String {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, router).await.unwrap();
            });
            format!("http://{}/persons", addr)
        }

        fn schema_with_upstream(url: String) -> RolodexSchema {
            let config = UpstreamConfig {
                url: Some(url),
                request_timeout_secs: 2,
            };
            let client = UpstreamClient::from_config(&config).unwrap().unwrap();
            build_schema(Arc::new(PersonStore::new()), Some(Arc::new(client)))
        }

        #[tokio::test]
        async fn test_all_persons_reads_remote_directory() {
            let router = Router::new().route(
                "/persons",
                get(|| async {
                    Json(serde_json::json!([
                        {"name": "Remote Ada", "phone": "123", "id": "r-1"},
                        {"name": "Remote Grace", "id": "r-2"}
                    ]))
                }),
            );
            let url = spawn_directory(router).await;
            let schema = schema_with_upstream(url);

            let json = execute(&schema, "{ allPersons(phone: YES) { name } }").await;
            let persons = json["data"]["allPersons"].as_array().unwrap();
            assert_eq!(persons.len(), 1);
            assert_eq!(persons[0]["name"], "Remote Ada");

            // The local store stays authoritative for everything else
            let json = execute(&schema, "{ personCount }").await;
            assert_eq!(json["data"]["personCount"], 0);
        }

        #[tokio::test]
        async fn test_all_persons_upstream_failure_is_server_error() {
            let router = Router::new().route(
                "/persons",
                get(|| async { (axum::http::StatusCode::BAD_GATEWAY, "down") }),
            );
            let url = spawn_directory(router).await;
            let schema = schema_with_upstream(url);

            let json = execute(&schema, "{ allPersons { name } }").await;
            let error = &json["errors"][0];
            assert_eq!(error["extensions"]["code"], "UPSTREAM_ERROR");
        }
    }
}
