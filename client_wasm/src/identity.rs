//! Anonymous identity kept in LocalStorage

use proto::sanitize_player_name;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "hoopshot_identity";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Issued by the worker; absent until the first successful sign-in
    pub user_id: Option<String>,
    #[serde(default)]
    pub player_name: String,
}

impl Identity {
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// Name shown on the leaderboard
    pub fn display_name(&self) -> String {
        sanitize_player_name(&self.player_name, self.user_id.as_deref().unwrap_or(""))
    }
}

/// Body of `POST /api/identity`
#[derive(Debug, Serialize)]
pub struct IdentityRequest<'a> {
    pub user_id: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityResponse {
    pub user_id: String,
    pub fresh: bool,
}

/// Load the saved identity, or an empty one
#[cfg(target_arch = "wasm32")]
pub fn load() -> Identity {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|s| s.get_item(STORAGE_KEY).ok())
        .flatten();

    match stored.as_deref().map(Identity::from_json) {
        Some(Some(identity)) => identity,
        Some(None) => {
            log::warn!("Discarding unreadable saved identity");
            Identity::default()
        }
        None => Identity::default(),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn save(identity: &Identity) -> Result<(), crate::error::ClientError> {
    use crate::error::ClientError;

    let storage = web_sys::window()
        .ok_or(ClientError::NoWindow)?
        .local_storage()
        .ok()
        .flatten()
        .ok_or(ClientError::NoStorage)?;
    let json = identity
        .to_json()
        .ok_or_else(|| ClientError::Encode("identity".to_string()))?;
    storage
        .set_item(STORAGE_KEY, &json)
        .map_err(|_| ClientError::NoStorage)
}
