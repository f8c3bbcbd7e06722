//! Tests for the backend-backed data-access collaborator.

use coffeeshop_frontend::db::{BackendDatabase, Database, DbError};
use url::Url;

mod common;

fn database_for(addr: std::net::SocketAddr) -> BackendDatabase {
    let base = Url::parse(&format!("http://{addr}/")).unwrap();
    BackendDatabase::new(base, 5).unwrap()
}

#[tokio::test]
async fn test_get_coffees_parses_backend_payload() {
    let backend = common::start_json_backend(
        200,
        r#"{"coffees":[{"id":1,"name":"House Blend","price":7.5}]}"#,
    )
    .await;
    let db = database_for(backend);

    let coffees = db.get_coffees().await.unwrap();
    assert_eq!(coffees.len(), 1);
    assert_eq!(coffees[0].name, "House Blend");
}

#[tokio::test]
async fn test_get_coffees_status_rejection_is_not_a_decode_error() {
    let backend = common::start_json_backend(500, r#"{"error":"down"}"#).await;
    let db = database_for(backend);

    match db.get_coffees().await {
        Err(DbError::Status(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_coffees_malformed_payload_is_a_decode_error() {
    let backend = common::start_backend_with(200, "text/html", "<html>oops</html>").await;
    let db = database_for(backend);

    assert!(matches!(db.get_coffees().await, Err(DbError::Decode(_))));
}

#[tokio::test]
async fn test_get_orders_rejection_is_falsy() {
    let backend = common::start_json_backend(401, r#"{"error":"no session"}"#).await;
    let db = database_for(backend);

    assert!(db.get_orders("tok-1").await.is_none());
}

#[tokio::test]
async fn test_get_orders_parses_backend_payload() {
    let backend = common::start_json_backend(
        200,
        r#"{"orders":[{"id":1,"user_id":2,"total_amount":9.0,"status":"pending","created_at":"2024-01-01","updated_at":"2024-01-02"}]}"#,
    )
    .await;
    let db = database_for(backend);

    let orders = db.get_orders("tok-1").await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, "pending");
}
