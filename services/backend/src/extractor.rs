use std::process::Stdio;
use std::time::Duration;

use serde::de::Error as _;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::models::video::{DEFAULT_TITLE, ExtractionResult, VideoInfo};
use crate::secrets::{DEFAULT_YTDLP_BIN, DEFAULT_YTDLP_TIMEOUT_SECS, SecretManager};

/// Flags passed before the target URL: JSON output, no warnings, metadata only.
const YTDLP_FLAGS: [&str; 3] = ["-j", "--no-warnings", "--skip-download"];

#[derive(Error, Debug)]
pub enum ExtractError {
    /// yt-dlp exited non-zero. Holds its raw stderr.
    #[error("yt-dlp failed: {0}")]
    Process(String),

    #[error("could not parse yt-dlp output: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("yt-dlp output has no stream url")]
    MissingStreamUrl,

    #[error("failed to run yt-dlp: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("yt-dlp timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),
}

/// Runs the external extraction tool, one subprocess per call.
#[derive(Clone, Debug)]
pub struct Extractor {
    program: String,
    leading_args: Vec<String>,
    timeout: Duration,
}

impl Extractor {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Extractor {
            program: program.into(),
            leading_args: Vec::new(),
            timeout,
        }
    }

    /// Arguments inserted between the program and the yt-dlp flags,
    /// e.g. `-m yt_dlp` when the program is `python3`.
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_secrets(secrets: &SecretManager) -> Self {
        let command_line = secrets.get("YTDLP_BIN");
        let mut words = command_line.split_whitespace();
        let program = words.next().unwrap_or(DEFAULT_YTDLP_BIN).to_string();
        let leading_args: Vec<String> = words.map(str::to_string).collect();

        let raw_timeout = secrets.get("YTDLP_TIMEOUT_SECS");
        let secs = match raw_timeout.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                warn!(
                    "Invalid YTDLP_TIMEOUT_SECS {:?}, using {}",
                    raw_timeout, DEFAULT_YTDLP_TIMEOUT_SECS
                );
                DEFAULT_YTDLP_TIMEOUT_SECS
            }
        };

        Extractor::new(program, Duration::from_secs(secs)).with_leading_args(leading_args)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full argument list for `url`, excluding the program itself.
    pub fn args_for(&self, url: &str) -> Vec<String> {
        let mut args = self.leading_args.clone();
        args.extend(YTDLP_FLAGS.iter().map(|flag| flag.to_string()));
        args.push(url.to_string());
        args
    }

    /// Resolves `url` to a direct stream link without downloading media.
    ///
    /// The child is killed if it outlives the timeout or if the returned
    /// future is dropped (client went away).
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult, ExtractError> {
        let args = self.args_for(url);
        debug!("Running {} {:?}", self.program, args);

        let child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let output = timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| ExtractError::Timeout(self.timeout))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(ExtractError::Process(stderr));
        }

        parse_video_info(&output.stdout)
    }
}

/// Parses one yt-dlp `-j` record. The top-level `url` is whatever yt-dlp
/// picked as the best format.
pub fn parse_video_info(stdout: &[u8]) -> Result<ExtractionResult, ExtractError> {
    // serde would also accept a JSON array for a struct
    let value: serde_json::Value = serde_json::from_slice(stdout)?;
    if !value.is_object() {
        return Err(serde_json::Error::custom("expected a JSON object").into());
    }
    let info: VideoInfo = serde_json::from_value(value)?;

    let stream_url = info
        .url
        .filter(|url| !url.is_empty())
        .ok_or(ExtractError::MissingStreamUrl)?;

    Ok(ExtractionResult {
        stream_url,
        title: info.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
    })
}
