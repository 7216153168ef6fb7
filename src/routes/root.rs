use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};

use crate::state::AppState;

pub fn new() -> Router<AppState> {
    Router::new().route("/hello", get(hello))
}

pub async fn hello() -> &'static str {
    "Hello World"
}

pub async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "page not found")
}
