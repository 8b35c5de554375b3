use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use midining_client::{ApiClient, ClientError};
use midining_shared::{
    Coordinate,
    preferences::{Preferences, Priority},
    user::Credentials,
};
use serde_json::{Value, json};

async fn spawn(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    ApiClient::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap()
}

/// A base url nothing listens on.
async fn unreachable() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    ApiClient::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn dining_info_sends_location_header() {
    let seen = Arc::new(Mutex::new(None));
    let captured = seen.clone();
    let client = spawn(Router::new().route(
        "/getmenu/",
        get(move |headers: HeaderMap| async move {
            *captured.lock().unwrap() = headers
                .get("location")
                .map(|v| v.to_str().unwrap().to_owned());

            Json(json!({
                "recommendation": {"reasoning": "Try the pho at South Quad."},
                "dining_info": [
                    {"dining_hall": "South Quad", "status": "Serving dinner", "distance": 0.7, "menus": {}}
                ],
                "payload": "Success"
            }))
        }),
    ))
    .await;

    let info = client
        .dining_info(Coordinate::new(42.2739968, -83.7287936).unwrap())
        .await
        .unwrap();

    assert_eq!(seen.lock().unwrap().as_deref(), Some("42.2739968,-83.7287936"));
    assert_eq!(info.dining_info[0].dining_hall, "South Quad");
    assert_eq!(info.recommendation.unwrap().reasoning, "Try the pho at South Quad.");
}

#[tokio::test]
async fn save_preferences_posts_json_body() {
    let seen = Arc::new(Mutex::new(None));
    let captured = seen.clone();
    let client = spawn(Router::new().route(
        "/save_preferences/",
        post(move |Json(body): Json<Value>| async move {
            *captured.lock().unwrap() = Some(body);
            Json(json!({"message": "Preferences saved successfully"}))
        }),
    ))
    .await;

    let mut preferences = Preferences::default();
    preferences.set_trait("vegan", Priority::Like).unwrap();
    preferences.toggle_allergen("soy").unwrap();

    client.save_preferences(&preferences).await.unwrap();

    let body = seen.lock().unwrap().take().unwrap();
    assert_eq!(body["traits"]["vegan"], "like");
    assert_eq!(body["allergens"]["soy"], true);
    assert_eq!(body["custom_preferences"], "");
}

#[tokio::test]
async fn error_status_keeps_body_fields_apart() {
    let client = spawn(
        Router::new()
            .route(
                "/end_session/",
                post(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"error": "Internal server error"})),
                    )
                }),
            )
            .route(
                "/save_preferences/",
                post(|| async {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({"message": "Database error. User not found"})),
                    )
                }),
            ),
    )
    .await;

    let err = client.end_session(&Preferences::default()).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 500, .. }));
    assert_eq!(err.server_error(), Some("Internal server error"));
    assert_eq!(err.server_message(), None);

    let err = client
        .save_preferences(&Preferences::default())
        .await
        .unwrap_err();
    assert_eq!(err.server_error(), None);
    assert_eq!(err.server_message(), Some("Database error. User not found"));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let client = spawn(Router::new().route(
        "/fetch_preferences/",
        get(|| async { Json(json!({"traits": {"vegan": "sometimes"}})) }),
    ))
    .await;

    let err = client.fetch_preferences().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn send_message_uses_header() {
    let client = spawn(Router::new().route(
        "/send_message/",
        post(|headers: HeaderMap| async move {
            let prompt = headers
                .get("message")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_owned();

            Json(json!({"user_id": "rahul", "prompt": prompt, "response": format!("You said: {prompt}")}))
        }),
    ))
    .await;

    let reply = client.send_message("Is Markley open?").await.unwrap();

    assert_eq!(reply.prompt.as_deref(), Some("Is Markley open?"));
    assert_eq!(reply.text(), Some("You said: Is Markley open?"));
}

#[tokio::test]
async fn signup_sends_credentials_and_maps_conflict() {
    let client = spawn(Router::new().route(
        "/signup/",
        post(|headers: HeaderMap| async move {
            let uniqname = headers.get("uniqname").and_then(|v| v.to_str().ok());
            let password = headers.get("password").and_then(|v| v.to_str().ok());

            match (uniqname, password) {
                (Some("taken"), Some(_)) => (
                    StatusCode::CONFLICT,
                    Json(json!({"message": "User already exists"})),
                ),
                (Some(_), Some(_)) => (
                    StatusCode::CREATED,
                    Json(json!({"message": "User registered successfully"})),
                ),
                _ => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": "Missing uniqname or password"})),
                ),
            }
        }),
    ))
    .await;

    client
        .signup(&Credentials::new("wolverine", "goblue").unwrap())
        .await
        .unwrap();

    let err = client
        .signup(&Credentials::new("taken", "goblue").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 409, .. }));
}

#[tokio::test]
async fn unreachable_backend() {
    let client = unreachable().await;

    let err = client.full_menu().await.unwrap_err();
    assert!(matches!(err, ClientError::Unreachable(_)), "{err:?}");
    assert!(!err.is_status());
}
