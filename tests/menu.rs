mod helpers;

use axum::{Json, Router, http::StatusCode, routing::get};
use midining::screens::MenuScreen;
use serde_json::json;

#[tokio::test]
async fn full_menu_renders_every_hall() {
    let client = helpers::spawn_backend(Router::new().route(
        "/get_full_menu/",
        get(|| async {
            Json(json!([
                {
                    "dining_hall": "South Quad",
                    "menus": {
                        "Lunch": {
                            "Halal": [{
                                "item_name": "Chicken Shawarma",
                                "traits": ["Halal", "Carbon Footprint Medium"],
                                "allergens": [],
                                "nutrition": {"calories": "610"}
                            }]
                        }
                    }
                },
                {"dining_hall": "Bursley", "menus": {}}
            ]))
        }),
    ))
    .await;

    let mut screen = MenuScreen::default();
    screen.mount(&client).await;

    assert!(!screen.loading);
    assert!(screen.alert.is_none());
    assert_eq!(screen.halls.len(), 2);

    let text = screen.render(false).unwrap();
    assert!(text.contains("=== South Quad ==="));
    assert!(text.contains("Chicken Shawarma [Halal] [Carbon Footprint Medium]"));
    assert!(text.contains("No Allergens"));
    assert!(text.contains("Calories: 610"));
    assert!(text.contains("=== Bursley ==="));
    assert!(!text.contains("No menu available for today."));
}

#[tokio::test]
async fn rejected_menu_alerts() {
    let client = helpers::spawn_backend(Router::new().route(
        "/get_full_menu/",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    ))
    .await;

    let mut screen = MenuScreen::default();
    screen.mount(&client).await;

    assert_eq!(screen.alert.clone().unwrap().message, "Unable to fetch menu.");
    assert!(
        screen
            .render(false)
            .unwrap()
            .contains("No menu available for today.")
    );
}

#[tokio::test]
async fn unreachable_menu_is_server_error() {
    let mut screen = MenuScreen::default();
    screen.mount(&helpers::unreachable_backend().await).await;

    assert_eq!(
        screen.alert.unwrap().message,
        "Server error. Please try again later."
    );
}
