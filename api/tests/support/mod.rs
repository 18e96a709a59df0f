#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rc_board::{AppState, app, store::RecordStore};
use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = RecordStore::open(dir.path().join("data"));
        store.ensure_initialized().await.expect("init store");
        let router = app(AppState::new(store), dir.path().join("public"));
        Self { router, dir }
    }

    pub fn data_file(&self, name: &str) -> PathBuf {
        self.dir.path().join("data").join(name)
    }

    pub fn public_dir(&self) -> PathBuf {
        self.dir.path().join("public")
    }

    /// Records currently on disk for `users.json` / `posts.json`.
    pub fn stored(&self, name: &str) -> Vec<Value> {
        let raw = std::fs::read_to_string(self.data_file(name)).expect("read data file");
        serde_json::from_str(&raw).expect("data file is a JSON array")
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(req).await
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = self.send_raw(req).await;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON response body")
        };
        (status, body)
    }

    pub async fn send_raw(&self, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    /// Signs up and logs in, returning the user's id.
    pub async fn register(&self, username: &str, name: &str) -> i64 {
        let (status, _) = self
            .post(
                "/api/signup",
                json!({ "username": username, "password": "pw", "name": name }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = self
            .post(
                "/api/login",
                json!({ "username": username, "password": "pw" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["user"]["id"].as_i64().expect("user id")
    }

    pub async fn create_post(&self, title: &str, author_id: i64, rc: Option<&str>) -> Value {
        let (status, body) = self
            .post(
                "/api/posts",
                json!({
                    "title": title,
                    "content": "content",
                    "author": "Author",
                    "authorId": author_id,
                    "rc": rc,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["post"].clone()
    }
}
