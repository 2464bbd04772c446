use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const HOME_MESSAGE: &str = "Video Downloader Backend is running!";

pub struct RootController;

impl RootController {
    pub async fn root() -> Response {
        (StatusCode::OK, HOME_MESSAGE).into_response()
    }

    pub async fn health_check() -> Response {
        (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response()
    }
}
