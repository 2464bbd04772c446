use crate::controllers::VideoController;
use crate::extractor::Extractor;
use crate::secrets::SecretManager;

/// Shared by every handler. Immutable after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub videos: VideoController,
}

impl AppState {
    pub fn new(extractor: Extractor) -> Self {
        AppState {
            videos: VideoController::new(extractor),
        }
    }

    pub fn from_secrets(secrets: &SecretManager) -> Self {
        AppState::new(Extractor::from_secrets(secrets))
    }
}
