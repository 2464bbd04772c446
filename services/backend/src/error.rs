use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::extractor::ExtractError;
use crate::models::video::DownloadResponse;

/// Every failure of `POST /download-video`, rendered as a JSON
/// `DownloadResponse` with `success: false`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing videoUrl in request")]
    MissingVideoUrl,

    #[error(transparent)]
    Extraction(#[from] ExtractError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingVideoUrl => StatusCode::BAD_REQUEST,
            ApiError::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller.
    pub fn message(&self) -> String {
        match self {
            ApiError::MissingVideoUrl => self.to_string(),
            ApiError::Extraction(ExtractError::Process(stderr)) => {
                format!("Error processing video: {}", stderr.trim())
            }
            ApiError::Extraction(ExtractError::Parse(_)) => {
                "Error parsing video information.".to_string()
            }
            ApiError::Extraction(ExtractError::MissingStreamUrl) => {
                "Could not find a direct download link for this video.".to_string()
            }
            ApiError::Extraction(e @ (ExtractError::Spawn(_) | ExtractError::Timeout(_))) => {
                format!("An unexpected error occurred: {}", e)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(DownloadResponse::failure(self.message()))).into_response()
    }
}
