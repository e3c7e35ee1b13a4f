#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use prompt_relay::config::{CorsSettings, UpstreamSettings};
use prompt_relay::startup::build_router;
use prompt_relay::state::AppState;
use secrecy::Secret;
use std::sync::Arc;
use std::time::Duration;

pub const API_KEY: &str = "test-key";
pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";

pub fn upstream_settings(url: String) -> UpstreamSettings {
    UpstreamSettings {
        url,
        api_key_header: "x-api-key".parse().unwrap(),
        api_key: Secret::new(API_KEY.to_string()),
    }
}

pub fn cors_settings() -> CorsSettings {
    CorsSettings {
        allowed_origins: vec![
            ALLOWED_ORIGIN.parse().unwrap(),
            "http://127.0.0.1:5173".parse().unwrap(),
        ],
        max_age: Duration::from_secs(300),
    }
}

/// Router wired exactly like the binary, pointed at `upstream_url`.
pub fn app(upstream_url: String) -> Router {
    let state = Arc::new(AppState::new(upstream_settings(upstream_url)));
    build_router(state, &cors_settings())
}

pub fn send_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/send")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
