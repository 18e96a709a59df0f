mod support;

use axum::{body::Body, http::{Request, StatusCode}};
use serde_json::json;
use support::TestApp;

#[tokio::test]
async fn health_check() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn static_files_are_served_from_public_dir() {
    let app = TestApp::new().await;
    std::fs::create_dir_all(app.public_dir()).unwrap();
    std::fs::write(app.public_dir().join("index.html"), "<h1>board</h1>").unwrap();

    let req = Request::builder().uri("/index.html").body(Body::empty()).unwrap();
    let (status, bytes) = app.send_raw(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"<h1>board</h1>");

    let req = Request::builder().uri("/missing.png").body(Body::empty()).unwrap();
    let (status, _) = app.send_raw(req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn growth_check_in_counts_new_days_only() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/growth", json!({ "today": "2026-10-16" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["attendanceDays"], 1);
    assert_eq!(body["lastVisitDate"], "Fri Oct 16 2026");
    assert_eq!(body["stage"], 1);
    assert_eq!(body["image"], "images/growth_round/growth_round_1.png");

    let (_, body) = app
        .post(
            "/api/growth",
            json!({ "attendanceDays": 1, "lastVisitDate": "Fri Oct 16 2026", "today": "2026-10-16" }),
        )
        .await;
    assert_eq!(body["attendanceDays"], 1);

    let (_, body) = app
        .post(
            "/api/growth",
            json!({ "attendanceDays": 36, "lastVisitDate": "Fri Oct 16 2026", "today": "2026-10-17" }),
        )
        .await;
    assert_eq!(body["attendanceDays"], 37);
    assert_eq!(body["stage"], 2);
    assert_eq!(body["badge"], "🌱 D+37");
}

#[tokio::test]
async fn growth_check_in_defaults_to_today() {
    let app = TestApp::new().await;
    let (status, body) = app.post("/api/growth", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["attendanceDays"], 1);
    assert!(body["lastVisitDate"].is_string());
}

#[tokio::test]
async fn growth_bonus() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/growth/bonus", json!({ "attendanceDays": 355 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["attendanceDays"], 365);
    assert_eq!(body["stage"], 10);

    let (status, _) = app.post("/api/growth/bonus", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
