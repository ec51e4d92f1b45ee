//! Inventory endpoint tests against an in-memory store
//! Run: cargo test -p liveshop-server --test inventory_api

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use liveshop_server::api::app_router;
use liveshop_server::{Config, ServerState};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> Router {
    let config = Config::from_env();
    let state = ServerState::in_memory(&config).await;
    app_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn watch_item() -> Value {
    json!({
        "itemId": 1111110,
        "itemName": "Wrist Watch",
        "quantity": 13,
        "amount": 20.5
    })
}

#[tokio::test]
async fn create_inventory_item() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/inventory", Some(json!([watch_item()]))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));

    let outcomes = body["data"].as_array().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0]["itemId"], json!(1111110));
    assert_eq!(outcomes[0]["success"], json!(true));
    assert_eq!(outcomes[0]["data"]["itemName"], json!("Wrist Watch"));
    assert_eq!(outcomes[0]["data"]["quantity"], json!(13));
    assert!(outcomes[0]["data"]["id"].is_string());
    assert!(outcomes[0]["data"]["created"].is_string());
    assert!(outcomes[0]["data"]["createdTimestamp"].is_i64());
}

#[tokio::test]
async fn reposting_the_same_item_id_updates_instead_of_duplicating() {
    let app = test_app().await;

    send(&app, "POST", "/inventory", Some(json!([watch_item()]))).await;

    let mut updated = watch_item();
    updated["quantity"] = json!(40);
    let (status, body) = send(&app, "POST", "/inventory", Some(json!([updated]))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"][0]["data"]["quantity"], json!(40));

    let (status, body) = send(&app, "GET", "/inventories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalRecords"], json!(1));
    assert_eq!(body["data"][0]["quantity"], json!(40));
}

#[tokio::test]
async fn batch_outcomes_preserve_input_order() {
    let app = test_app().await;

    let batch = json!([
        {"itemId": 22, "itemName": "Lamp", "quantity": 5, "amount": 9.99},
        {"itemId": 11, "itemName": "Rug", "quantity": 2, "amount": 45.0},
    ]);
    let (status, body) = send(&app, "POST", "/inventory", Some(batch)).await;

    assert_eq!(status, StatusCode::CREATED);
    let outcomes = body["data"].as_array().unwrap();
    assert_eq!(outcomes[0]["itemId"], json!(22));
    assert_eq!(outcomes[1]["itemId"], json!(11));
}

#[tokio::test]
async fn validation_failures_use_indexed_error_keys() {
    let app = test_app().await;

    let batch = json!([
        watch_item(),
        {"itemId": "abc", "itemName": "Bad?Name", "quantity": 1, "amount": 1.234},
    ]);
    let (status, body) = send(&app, "POST", "/inventory", Some(batch)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["errors"]["itemId_1"], json!("\"Item ID\" must be a number"));
    assert_eq!(
        body["errors"]["amount_1"],
        json!("\"Item Amount\" must have no more than 2 decimal places")
    );
    assert!(
        body["errors"]["itemName_1"]
            .as_str()
            .unwrap()
            .contains("fails to match the required pattern")
    );

    // Nothing was stored; validation runs before any writes.
    let (_, body) = send(&app, "GET", "/inventories", None).await;
    assert_eq!(body["totalRecords"], json!(0));
}

#[tokio::test]
async fn non_array_payload_is_rejected() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/inventory", Some(watch_item())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["api_request"], json!("Invalid payload provided!"));
    assert!(body["server_error"].is_string());
}

#[tokio::test]
async fn empty_payload_reports_min_length() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/inventory", Some(json!([]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 1);
    let (key, message) = errors.iter().next().unwrap();
    assert!(key.starts_with("field_"));
    assert_eq!(message, &json!("\"Payload\" must contain at least 1 items"));
}

#[tokio::test]
async fn get_inventory_by_item_id() {
    let app = test_app().await;
    send(&app, "POST", "/inventory", Some(json!([watch_item()]))).await;

    let (status, body) = send(&app, "GET", "/inventory/1111110", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["itemId"], json!(1111110));
    assert_eq!(body["data"]["itemName"], json!("Wrist Watch"));
}

#[tokio::test]
async fn unknown_item_id_is_a_client_error() {
    let app = test_app().await;

    for uri in ["/inventory/999", "/inventory/not-a-number"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["errors"]["inventory"],
            json!("No inventory found with the supplied parameter")
        );
    }
}

#[tokio::test]
async fn empty_inventory_list_has_null_data() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/inventories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["totalRecords"], json!(0));
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn store_failures_surface_as_application_errors() {
    let app = test_app().await;

    // A constraint key the store layer refuses to interpolate forces the
    // lookup itself to fail, exercising the backend-error path.
    let (status, body) = send(
        &app,
        "GET",
        "/inventories",
        Some(json!({"bad key": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["errors"]["app"],
        json!("We couldn't process your request at the moment, please try again.")
    );
}

#[tokio::test]
async fn inventory_list_filters_by_constraints() {
    let app = test_app().await;
    let batch = json!([
        {"itemId": 1, "itemName": "Lamp", "quantity": 5, "amount": 9.99},
        {"itemId": 2, "itemName": "Rug", "quantity": 2, "amount": 45.0},
    ]);
    send(&app, "POST", "/inventory", Some(batch)).await;

    let (status, body) = send(
        &app,
        "GET",
        "/inventories",
        Some(json!({"itemName": "Rug"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalRecords"], json!(1));
    assert_eq!(body["data"][0]["itemId"], json!(2));
}
