mod helpers;

use async_trait::async_trait;
use axum::{Json, Router, http::HeaderMap, routing::post};
use midining::{cli::converse, screens::ChatOverlay};
use midining_client::{ChatService, ClientError};
use midining_shared::chat::{APOLOGY, ChatReply, GREETING};
use serde_json::json;

struct Echo;

#[async_trait]
impl ChatService for Echo {
    async fn send_message(&self, message: &str) -> midining_client::Result<ChatReply> {
        Ok(ChatReply {
            response: Some(format!("You said: {message}")),
            ..Default::default()
        })
    }
}

struct Broken;

#[async_trait]
impl ChatService for Broken {
    async fn send_message(&self, _message: &str) -> midining_client::Result<ChatReply> {
        Err(ClientError::Status {
            status: 500,
            error: None,
            message: None,
        })
    }
}

struct Silent;

#[async_trait]
impl ChatService for Silent {
    async fn send_message(&self, _message: &str) -> midining_client::Result<ChatReply> {
        Ok(ChatReply::default())
    }
}

#[tokio::test]
async fn reply_follows_user_bubble() {
    let mut overlay = ChatOverlay::default();
    assert_eq!(overlay.messages.len(), 1);
    assert_eq!(overlay.messages[0].text, GREETING);

    assert_eq!(overlay.send(&Echo, "Where is pho today?").await, 2);

    let messages = &overlay.messages[1..];
    assert!(!messages[0].is_bot);
    assert_eq!(messages[0].text, "Where is pho today?");
    assert!(messages[1].is_bot);
    assert_eq!(messages[1].text, "You said: Where is pho today?");
    assert!(messages[0].timestamp <= messages[1].timestamp);
}

#[tokio::test]
async fn failure_appends_apology() {
    let mut overlay = ChatOverlay::default();

    assert_eq!(overlay.send(&Broken, "hello").await, 2);
    assert_eq!(overlay.messages.last().unwrap().text, APOLOGY);
}

#[tokio::test]
async fn blank_and_empty_replies() {
    let mut overlay = ChatOverlay::default();

    assert_eq!(overlay.send(&Echo, "   ").await, 0);
    assert_eq!(overlay.send(&Silent, "hello").await, 1);
    assert_eq!(overlay.messages.len(), 2);
}

#[tokio::test]
async fn overlay_talks_to_backend() {
    let client = helpers::spawn_backend(Router::new().route(
        "/send_message/",
        post(|headers: HeaderMap| async move {
            let prompt = headers.get("message").unwrap().to_str().unwrap().to_owned();
            Json(json!({"user_id": "rahul", "prompt": prompt, "response": "Try Markley."}))
        }),
    ))
    .await;

    let mut overlay = ChatOverlay::default();
    overlay.send(&client, "Dinner ideas?").await;

    assert_eq!(overlay.messages.last().unwrap().text, "Try Markley.");
}

#[tokio::test]
async fn converse_runs_until_exit() {
    let mut overlay = ChatOverlay::default();
    let input: &[u8] = b"first\n\n/exit\nnever sent\n";
    let mut out = Vec::new();

    converse(&mut overlay, &Echo, input, &mut out).await.unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains(GREETING));
    assert!(out.contains("You: first"));
    assert!(out.contains("Assistant: You said: first"));
    assert!(!out.contains("never sent"));
    assert_eq!(overlay.messages.len(), 3);
}

#[tokio::test]
async fn converse_stops_at_end_of_input() {
    let mut overlay = ChatOverlay::default();
    let input: &[u8] = b"one\ntwo";
    let mut out = Vec::new();

    converse(&mut overlay, &Echo, input, &mut out).await.unwrap();

    assert_eq!(overlay.messages.len(), 5);
}
