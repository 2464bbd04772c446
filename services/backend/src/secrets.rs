// secrets
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use tracing::info;
pub static SECRET_MANAGER: Lazy<SecretManager> = Lazy::new(|| SecretManager::new());

pub const DEFAULT_PORT: &str = "5000";
pub const DEFAULT_YTDLP_BIN: &str = "yt-dlp";
pub const DEFAULT_YTDLP_TIMEOUT_SECS: u64 = 120;

enum MODE {
    DEV,
    PROD,
}

pub struct SecretManager {
    secrets: HashMap<String, String>,
}
impl SecretManager {
    fn new() -> Self {
        let mut secrets: HashMap<String, String> = HashMap::new();
        let mode = match env::var("MODE") {
            Ok(mode) if mode.to_lowercase() == "prod" => MODE::PROD,
            _ => MODE::DEV,
        };
        match mode {
            MODE::DEV => {
                secrets.insert("PORT".to_string(), DEFAULT_PORT.to_string());
                secrets.insert(
                    "BACKEND_URL".to_string(),
                    format!("http://localhost:{}", DEFAULT_PORT),
                );
            }
            MODE::PROD => {
                secrets.insert(
                    "PORT".to_string(),
                    env::var("PORT").unwrap_or(DEFAULT_PORT.to_string()),
                );
                secrets.insert(
                    "BACKEND_URL".to_string(),
                    env::var("BACKEND_URL").unwrap_or_default(),
                );
            }
        }

        // Extraction tool, overridable in both modes
        secrets.insert(
            "YTDLP_BIN".to_string(),
            env::var("YTDLP_BIN").unwrap_or(DEFAULT_YTDLP_BIN.to_string()),
        );
        secrets.insert(
            "YTDLP_TIMEOUT_SECS".to_string(),
            env::var("YTDLP_TIMEOUT_SECS").unwrap_or(DEFAULT_YTDLP_TIMEOUT_SECS.to_string()),
        );

        // Log which secrets are configured (NOT their values!)
        let configured: Vec<&str> = secrets
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k.as_str())
            .collect();
        info!("Secrets configured: {:?}", configured);

        SecretManager { secrets }
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let secrets = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SecretManager { secrets }
    }

    pub fn get(&self, key: &str) -> String {
        self.secrets.get(key).cloned().unwrap_or_default()
    }
}
