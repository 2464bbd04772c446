use serde::{Deserialize, Serialize};

pub const DEFAULT_PLATFORM: &str = "Unknown";
pub const DEFAULT_TITLE: &str = "Video";
pub const SUCCESS_MESSAGE: &str = "Download link retrieved successfully.";

/// Body of `POST /download-video`.
///
/// `platform` is informational only, so any non-string value is treated as
/// absent rather than rejected.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub platform: Option<serde_json::Value>,
}

impl DownloadRequest {
    /// Decodes a raw request body. Returns `None` when the body is not a
    /// JSON object of the expected shape.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        // serde would also accept a JSON array for a struct
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// The requested URL, if present and non-empty.
    pub fn video_url(&self) -> Option<&str> {
        self.video_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn platform(&self) -> &str {
        self.platform
            .as_ref()
            .and_then(|p| p.as_str())
            .unwrap_or(DEFAULT_PLATFORM)
    }
}

/// The subset of the yt-dlp `-j` record that the service relays.
#[derive(Deserialize, Clone, Debug)]
pub struct VideoInfo {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExtractionResult {
    pub stream_url: String,
    pub title: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub message: String,
}

impl DownloadResponse {
    pub fn found(result: ExtractionResult) -> Self {
        DownloadResponse {
            success: true,
            download_url: Some(result.stream_url),
            title: Some(result.title),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        DownloadResponse {
            success: false,
            download_url: None,
            title: None,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_defaults_to_unknown() {
        let req = DownloadRequest::from_body(br#"{"videoUrl":"https://a.example/v"}"#).unwrap();
        assert_eq!(req.video_url(), Some("https://a.example/v"));
        assert_eq!(req.platform(), "Unknown");
    }

    #[test]
    fn non_string_platform_is_ignored() {
        let req =
            DownloadRequest::from_body(br#"{"videoUrl":"https://a.example/v","platform":7}"#)
                .unwrap();
        assert_eq!(req.platform(), "Unknown");

        let req = DownloadRequest::from_body(
            br#"{"videoUrl":"https://a.example/v","platform":"TikTok"}"#,
        )
        .unwrap();
        assert_eq!(req.platform(), "TikTok");
    }

    #[test]
    fn empty_or_null_video_url_is_missing() {
        let req = DownloadRequest::from_body(br#"{"videoUrl":""}"#).unwrap();
        assert_eq!(req.video_url(), None);
        let req = DownloadRequest::from_body(br#"{"videoUrl":null}"#).unwrap();
        assert_eq!(req.video_url(), None);
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert!(DownloadRequest::from_body(b"").is_none());
        assert!(DownloadRequest::from_body(b"not json").is_none());
        assert!(DownloadRequest::from_body(b"[1,2]").is_none());
        assert!(DownloadRequest::from_body(br#"["https://a.example/v"]"#).is_none());
        assert!(DownloadRequest::from_body(br#"{"videoUrl":42}"#).is_none());
    }

    #[test]
    fn failure_response_omits_link_fields() {
        let body = serde_json::to_value(DownloadResponse::failure("nope")).unwrap();
        assert_eq!(body, serde_json::json!({"success": false, "message": "nope"}));
    }

    #[test]
    fn found_response_uses_camel_case() {
        let body = serde_json::to_value(DownloadResponse::found(ExtractionResult {
            stream_url: "https://cdn.example/x.mp4".to_string(),
            title: "My Video".to_string(),
        }))
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": true,
                "downloadUrl": "https://cdn.example/x.mp4",
                "title": "My Video",
                "message": "Download link retrieved successfully."
            })
        );
    }
}
