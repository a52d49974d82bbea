// Integration tests driving the full router over in-memory databases.
// Every test builds its own app, so collections start empty and the only
// pre-existing rows are the seeded admin user and the settings singleton.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use folio_server::{api, db::Database, state::AppState};

fn test_app() -> Router {
    let db = Database::in_memory().expect("Failed to create test database");
    db.initialize().expect("Failed to initialize schema");
    api::router(AppState::new(db))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json_body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

fn message(body: &Value) -> &str {
    body["message"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

// ===== Auth =====

#[tokio::test]
async fn test_login_with_seed_credentials() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({"username": "aka", "password": "akaanakbaik17"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(message(&body), "Login successful");
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["username"], "aka");
    // The stored password never crosses the wire
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/api/auth/login", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "Username and password required");

    // An empty string counts as missing, the same way the dashboard submits
    // untouched inputs
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({"username": "aka", "password": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "Username and password required");
}

#[tokio::test]
async fn test_login_failures_do_not_reveal_accounts() {
    let app = test_app();

    let (wrong_status, wrong_body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({"username": "aka", "password": "nope"})),
    )
    .await;
    let (ghost_status, ghost_body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({"username": "ghost", "password": "nope"})),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(ghost_status, StatusCode::UNAUTHORIZED);
    // Identical responses for wrong password and unknown username
    assert_eq!(wrong_body, ghost_body);
    assert_eq!(message(&wrong_body), "Invalid credentials");
}

// ===== Settings =====

#[tokio::test]
async fn test_get_settings_returns_seeded_profile() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/settings", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["profileName"], "aka");
    assert_eq!(body["profileAge"], 15);
    assert!(body["profileImageUrl"].is_string());
    assert_eq!(body["statusTexts"]["id"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["statusTexts"]["en"][0], "Student");
}

#[tokio::test]
async fn test_put_settings_replaces_and_persists() {
    let app = test_app();
    let payload = json!({
        "profileImageUrl": "https://example.com/new.jpg",
        "profileName": "aka baru",
        "profileAge": 16,
        "whatsappUrl": "https://wa.me/628000000000",
        "backgroundAudioUrl": "",
        "statusTexts": {"id": ["Pelajar"], "en": ["Student"]}
    });

    let (status, body) = send(&app, Method::PUT, "/api/settings", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profileName"], "aka baru");
    // Empty audio URL normalizes to null, matching the dashboard's clear action
    assert_eq!(body["backgroundAudioUrl"], Value::Null);

    let (status, fetched) = send(&app, Method::GET, "/api/settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_put_settings_rejects_partial_payload() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/settings",
        Some(json!({"profileName": "aka"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "Invalid settings data");

    // The stored settings are untouched
    let (_, fetched) = send(&app, Method::GET, "/api/settings", None).await;
    assert_eq!(fetched["profileAge"], 15);
}

// ===== Friends =====

#[tokio::test]
async fn test_first_friend_gets_id_one_and_order_one() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/friends",
        Some(json!({"name": "X", "description": "Y", "imageUrl": "Z"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["order"], 1);
    assert_eq!(body["name"], "X");
    assert_eq!(body["description"], "Y");
    assert_eq!(body["imageUrl"], "Z");

    let (status, list) = send(&app, Method::GET, "/api/friends", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    assert_eq!(list[0]["order"], 1);
}

#[tokio::test]
async fn test_friend_crud_flow_keeps_ranks_dense() {
    let app = test_app();
    for name in ["Budi", "Sari", "Andi"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/friends",
            Some(json!({
                "name": name,
                "description": "teman",
                "imageUrl": "https://example.com/f.jpg"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    // Patch one field; the rest survive
    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/friends/2",
        Some(json!({"name": "Sari Dewi"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Sari Dewi");
    assert_eq!(updated["description"], "teman");
    assert_eq!(updated["order"], 2);

    // Delete the head; the survivors are re-ranked on read
    let (status, ack) = send(&app, Method::DELETE, "/api/friends/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message(&ack), "Friend deleted successfully");

    let (_, list) = send(&app, Method::GET, "/api/friends", None).await;
    let names: Vec<&str> = list
        .as_array()
        .expect("list should be an array")
        .iter()
        .map(|f| f["name"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["Sari Dewi", "Andi"]);
    assert_eq!(list[0]["order"], 1);
    assert_eq!(list[1]["order"], 2);
    // Ids are stable even though ranks moved
    assert_eq!(list[0]["id"], 2);
    assert_eq!(list[1]["id"], 3);
}

#[tokio::test]
async fn test_create_friend_rejects_incomplete_payload() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/friends",
        Some(json!({"name": "Budi"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "Invalid friend data");

    let (_, list) = send(&app, Method::GET, "/api/friends", None).await;
    assert_eq!(list.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_client_supplied_id_and_order_are_ignored() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/friends",
        Some(json!({
            "id": 99,
            "order": 42,
            "name": "Budi",
            "description": "teman",
            "imageUrl": "https://example.com/b.jpg"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["order"], 1);
}

#[tokio::test]
async fn test_friend_update_and_delete_answer_404_when_missing() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/friends/99",
        Some(json!({"name": "Budi"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Friend not found");

    let (status, body) = send(&app, Method::DELETE, "/api/friends/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Friend not found");
}

#[tokio::test]
async fn test_delete_is_not_repeatable() {
    let app = test_app();
    send(
        &app,
        Method::POST,
        "/api/friends",
        Some(json!({"name": "Budi", "description": "teman", "imageUrl": "x"})),
    )
    .await;

    let (first, _) = send(&app, Method::DELETE, "/api/friends/1", None).await;
    let (second, _) = send(&app, Method::DELETE, "/api/friends/1", None).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_answers_400_with_message_body() {
    let app = test_app();
    let (status, body) = send(&app, Method::DELETE, "/api/friends/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!message(&body).is_empty());
}

#[tokio::test]
async fn test_malformed_json_answers_400_with_message_body() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/friends")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body: Value = serde_json::from_slice(&bytes).expect("error body should be JSON");
    assert!(!message(&body).is_empty());
}

// ===== Projects =====

#[tokio::test]
async fn test_project_crud_flow() {
    let app = test_app();
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/projects",
        Some(json!({
            "name": "Portfolio Website",
            "description": "Website portfolio modern",
            "imageUrl": "https://example.com/p.png",
            "projectUrl": "#"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["projectUrl"], "#");
    assert_eq!(created["order"], 1);

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/projects/1",
        Some(json!({"projectUrl": "https://aka.dev"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["projectUrl"], "https://aka.dev");
    assert_eq!(updated["name"], "Portfolio Website");

    let (status, ack) = send(&app, Method::DELETE, "/api/projects/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message(&ack), "Project deleted successfully");

    let (_, list) = send(&app, Method::GET, "/api/projects", None).await;
    assert_eq!(list.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_create_project_requires_project_url() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/projects",
        Some(json!({
            "name": "Portfolio Website",
            "description": "Website portfolio modern",
            "imageUrl": "https://example.com/p.png"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "Invalid project data");
}

// ===== Social media =====

#[tokio::test]
async fn test_social_media_crud_flow() {
    let app = test_app();
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/social-media",
        Some(json!({
            "name": "TikTok",
            "username": "@aka_profile",
            "url": "https://tiktok.com/@aka_profile",
            "iconClass": "fab fa-tiktok"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["iconClass"], "fab fa-tiktok");
    assert_eq!(created["order"], 1);

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/social-media/1",
        Some(json!({"username": "@aka_baru"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["username"], "@aka_baru");
    assert_eq!(updated["url"], "https://tiktok.com/@aka_profile");

    let (status, ack) = send(&app, Method::DELETE, "/api/social-media/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message(&ack), "Social media deleted successfully");
}

#[tokio::test]
async fn test_create_social_media_requires_icon_class() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/social-media",
        Some(json!({
            "name": "TikTok",
            "username": "@aka_profile",
            "url": "https://tiktok.com/@aka_profile"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "Invalid social media data");
}

#[tokio::test]
async fn test_update_social_media_rejects_present_but_empty_field() {
    let app = test_app();
    send(
        &app,
        Method::POST,
        "/api/social-media",
        Some(json!({
            "name": "GitHub",
            "username": "@aka-dev",
            "url": "https://github.com/aka-dev",
            "iconClass": "fab fa-github"
        })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/social-media/1",
        Some(json!({"url": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "Invalid social media data");

    // Record is unchanged
    let (_, list) = send(&app, Method::GET, "/api/social-media", None).await;
    assert_eq!(list[0]["url"], "https://github.com/aka-dev");
}

// ===== Cross-entity id independence =====

#[tokio::test]
async fn test_each_collection_counts_ids_independently() {
    let app = test_app();
    send(
        &app,
        Method::POST,
        "/api/friends",
        Some(json!({"name": "Budi", "description": "teman", "imageUrl": "x"})),
    )
    .await;
    let (_, project) = send(
        &app,
        Method::POST,
        "/api/projects",
        Some(json!({
            "name": "Game",
            "description": "puzzle",
            "imageUrl": "x",
            "projectUrl": "#"
        })),
    )
    .await;

    // The friend created first does not advance the project counter
    assert_eq!(project["id"], 1);
}
