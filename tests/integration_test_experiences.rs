mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_create_and_get_experience() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(json_request("POST", "/api/v1/experiences", json!({
        "slug": "mangrove-kayak",
        "title": "Mangrove Kayak Tour",
        "description": "Guided paddle through the mangroves",
        "location": "Cartagena"
    }))).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let created = parse_body(res).await;
    assert_eq!(created["slug"], "mangrove-kayak");
    assert!(created["id"].as_str().unwrap().len() > 0);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/experiences/mangrove-kayak")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let fetched = parse_body(res).await;
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["title"], "Mangrove Kayak Tour");
}

#[tokio::test]
async fn test_duplicate_slug_conflict() {
    let app = TestApp::new().await;
    app.create_experience("dup-slug").await;

    let res = app.router.clone().oneshot(json_request("POST", "/api/v1/experiences", json!({
        "slug": "dup-slug",
        "title": "Another",
        "description": ".",
        "location": "."
    }))).await.unwrap();

    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_empty_slug_rejected() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(json_request("POST", "/api/v1/experiences", json!({
        "slug": "  ",
        "title": "T",
        "description": ".",
        "location": "."
    }))).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_experience() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/experiences/nope")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_preserves_unpatched_fields() {
    let app = TestApp::new().await;
    app.create_experience("patch-me").await;

    let res = app.router.clone().oneshot(json_request("PUT", "/api/v1/experiences/patch-me", json!({
        "title": "Renamed Tour"
    }))).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let updated = parse_body(res).await;
    assert_eq!(updated["title"], "Renamed Tour");
    assert_eq!(updated["slug"], "patch-me");
    assert_eq!(updated["location"], "Isla Grande");
    assert_eq!(updated["description"], "Snorkeling and lunch");
}

#[tokio::test]
async fn test_delete_experience_removes_seasons() {
    let app = TestApp::new().await;
    let experience_id = app.create_experience("doomed").await;

    let bulk = json!({
        "experience_id": experience_id,
        "blocks": [{
            "start_date": "2024-06-01",
            "end_date": "2024-06-30",
            "capacity": 10,
            "price_per_adult_cents": 15000000,
            "price_per_child_cents": 10000000,
            "commission_per_adult_cents": 3000000,
            "commission_per_child_cents": 2000000,
            "slots": [{"start_hour": 9, "start_minute": 0, "end_hour": 17, "end_minute": 0}]
        }]
    });
    let res = app.router.clone().oneshot(json_request("POST", "/api/v1/availability/bulk", bulk)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri("/api/v1/experiences/doomed")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/experiences/doomed")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let seasons = app.state.availability_repo.list_by_experience(&experience_id).await.unwrap();
    assert!(seasons.is_empty(), "Seasons must be removed with their experience");
}
