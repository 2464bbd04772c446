use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

use crate::{
    error::ApiError,
    extractor::{ExtractError, Extractor},
    models::video::{DownloadRequest, DownloadResponse},
};

/// Resolves media page URLs to direct stream links. Holds no per-request
/// state; every call spawns its own extractor process.
#[derive(Clone, Debug)]
pub struct VideoController {
    extractor: Extractor,
}

impl VideoController {
    pub fn new(extractor: Extractor) -> Self {
        VideoController { extractor }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub async fn download_video(&self, body: &[u8]) -> Response {
        match self._resolve(body).await {
            Ok(response) => (StatusCode::OK, Json(response)).into_response(),
            Err(e) => e.into_response(),
        }
    }

    async fn _resolve(&self, body: &[u8]) -> Result<DownloadResponse, ApiError> {
        // A malformed body is reported the same way as a missing field
        let request = DownloadRequest::from_body(body).unwrap_or_default();
        let Some(video_url) = request.video_url() else {
            warn!("Rejected download request without videoUrl");
            return Err(ApiError::MissingVideoUrl);
        };

        info!(
            "Received request for URL: {} from platform: {}",
            video_url,
            request.platform()
        );

        match self.extractor.extract(video_url).await {
            Ok(result) => {
                info!("Found download URL: {}", result.stream_url);
                Ok(DownloadResponse::found(result))
            }
            Err(e) => {
                match &e {
                    ExtractError::Process(stderr) => error!("yt-dlp error: {}", stderr.trim()),
                    ExtractError::Parse(err) => {
                        error!("Error parsing yt-dlp output as JSON: {}", err)
                    }
                    ExtractError::MissingStreamUrl => {
                        warn!("No direct download URL found by yt-dlp for {}", video_url)
                    }
                    ExtractError::Spawn(_) | ExtractError::Timeout(_) => {
                        error!("An unexpected error occurred: {}", e)
                    }
                }
                Err(e.into())
            }
        }
    }
}
