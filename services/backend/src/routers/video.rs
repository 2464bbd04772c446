use axum::{body::Bytes, extract::State, response::Response};

use crate::state::AppState;

// Raw bytes so that a missing or wrong Content-Type still gets the JSON 400
pub async fn download_video_route(State(state): State<AppState>, body: Bytes) -> Response {
    state.videos.download_video(&body).await
}
