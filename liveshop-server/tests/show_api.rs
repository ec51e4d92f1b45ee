//! Show endpoint and routing tests against an in-memory store
//! Run: cargo test -p liveshop-server --test show_api

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

fn summer_show() -> Value {
    json!({
        "showId": 1010001,
        "showName": "Summer Kickoff",
        "showDate": "06/08/2023",
        "showStatus": "Active"
    })
}

#[tokio::test]
async fn create_show() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/show", Some(json!([summer_show()]))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));

    let outcomes = body["data"].as_array().unwrap();
    assert_eq!(outcomes[0]["showId"], json!(1010001));
    assert_eq!(outcomes[0]["success"], json!(true));
    assert_eq!(outcomes[0]["data"]["showStatus"], json!("Active"));
    assert!(outcomes[0]["data"]["id"].is_string());
}

#[tokio::test]
async fn reposting_the_same_show_id_updates_instead_of_duplicating() {
    let app = test_app().await;
    send(&app, "POST", "/show", Some(json!([summer_show()]))).await;

    let mut closed = summer_show();
    closed["showStatus"] = json!("Inactive");
    let (status, _) = send(&app, "POST", "/show", Some(json!([closed]))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", "/shows", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalRecords"], json!(1));
    assert_eq!(body["data"][0]["showStatus"], json!("Inactive"));
}

#[tokio::test]
async fn show_date_must_match_the_expected_format() {
    let app = test_app().await;

    let mut show = summer_show();
    show["showDate"] = json!("2023-06-08");
    let (status, body) = send(&app, "POST", "/show", Some(json!([show]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["errors"]["showDate_0"]
            .as_str()
            .unwrap()
            .contains("must be valid. Date must be in the format MM/DD/YYYY")
    );
}

#[tokio::test]
async fn show_status_is_restricted_to_the_known_values() {
    let app = test_app().await;

    let mut show = summer_show();
    show["showStatus"] = json!("Open");
    let (status, body) = send(&app, "POST", "/show", Some(json!([show]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["showStatus_0"],
        json!("\"Show Status\" must be one of [Active, Inactive]")
    );
}

#[tokio::test]
async fn empty_show_list_has_null_data() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/shows", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalRecords"], json!(0));
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn greeting_route_answers_in_plain_text() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Live Shop API!!!");
}

#[tokio::test]
async fn unknown_routes_fall_back_to_the_not_found_envelope() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/no/such/route", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["errors"]["resource"],
        json!("Requested resource does not exist or has been moved.")
    );
}
