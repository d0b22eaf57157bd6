//! Network message handling

use crate::error::ClientError;
use crate::state::HudState;
use proto::{C2S, S2C};

/// Apply a leaderboard reply to the HUD.
///
/// Returns true when the stored best changed and the leaderboard should be
/// fetched again.
pub fn handle_message(msg: S2C, hud: &mut HudState) -> Result<bool, ClientError> {
    match msg {
        S2C::Best { score } => {
            hud.set_best(score);
            Ok(false)
        }
        S2C::ScoreAccepted { entry, previous } => {
            // A slower reply for an earlier basket; a higher best is already shown
            if hud.best().is_some_and(|best| entry.score < best) {
                return Ok(false);
            }
            hud.set_best(Some(entry.score));
            let status = match previous {
                Some(prev) => format!("New best: {} (was {})", entry.score, prev),
                None => format!("Score saved: {}", entry.score),
            };
            hud.set_status(status);
            Ok(true)
        }
        S2C::ScoreKept { best } => {
            // Another tab may have stored a higher score
            hud.set_best(Some(best));
            Ok(false)
        }
        S2C::Leaderboard { entries } => {
            hud.set_leaderboard(entries);
            Ok(false)
        }
        S2C::Error { message } => Err(ClientError::Server(message)),
    }
}

/// Create fetch-best message bytes
pub fn create_fetch_best_message(user_id: &str) -> Result<Vec<u8>, ClientError> {
    C2S::FetchBest {
        user_id: user_id.to_string(),
    }
    .to_bytes()
    .map_err(|e| ClientError::Encode(format!("{:?}", e)))
}

/// Create submit message bytes
pub fn create_submit_message(
    user_id: &str,
    player_name: &str,
    score: u32,
) -> Result<Vec<u8>, ClientError> {
    C2S::SubmitScore {
        user_id: user_id.to_string(),
        player_name: player_name.to_string(),
        score,
    }
    .to_bytes()
    .map_err(|e| ClientError::Encode(format!("{:?}", e)))
}

/// Create leaderboard request bytes
pub fn create_leaderboard_message(limit: u8) -> Result<Vec<u8>, ClientError> {
    C2S::FetchLeaderboard { limit }
        .to_bytes()
        .map_err(|e| ClientError::Encode(format!("{:?}", e)))
}

pub fn decode_reply(bytes: &[u8]) -> Result<S2C, ClientError> {
    S2C::from_bytes(bytes).map_err(|e| ClientError::Decode(format!("{:?}", e)))
}

#[cfg(target_arch = "wasm32")]
pub use http::*;

#[cfg(target_arch = "wasm32")]
mod http {
    use super::decode_reply;
    use crate::config::ClientConfig;
    use crate::error::ClientError;
    use crate::identity::{IdentityRequest, IdentityResponse};
    use proto::S2C;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    async fn post(url: &str, body: &[u8], content_type: &str) -> Result<Response, ClientError> {
        let window = web_sys::window().ok_or(ClientError::NoWindow)?;

        let init = RequestInit::new();
        init.set_method("POST");
        let body = js_sys::Uint8Array::from(body);
        init.set_body(&body.into());

        let request =
            Request::new_with_str_and_init(url, &init).map_err(ClientError::network)?;
        request
            .headers()
            .set("Content-Type", content_type)
            .map_err(ClientError::network)?;

        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(ClientError::network)?;
        let response: Response = value.dyn_into().map_err(ClientError::network)?;
        if !response.ok() {
            return Err(ClientError::Http(response.status()));
        }
        Ok(response)
    }

    /// Send one postcard RPC to the leaderboard
    pub async fn rpc(config: &ClientConfig, body: Vec<u8>) -> Result<S2C, ClientError> {
        let response = post(&config.rpc_url(), &body, "application/octet-stream").await?;
        let buffer = JsFuture::from(response.array_buffer().map_err(ClientError::network)?)
            .await
            .map_err(ClientError::network)?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        decode_reply(&bytes)
    }

    /// Confirm a stored user id or get a new one
    pub async fn request_identity(
        config: &ClientConfig,
        existing: Option<&str>,
    ) -> Result<IdentityResponse, ClientError> {
        let body = serde_json::to_vec(&IdentityRequest { user_id: existing })
            .map_err(|e| ClientError::Encode(e.to_string()))?;
        let response = post(&config.identity_url(), &body, "application/json").await?;
        let text = JsFuture::from(response.text().map_err(ClientError::network)?)
            .await
            .map_err(ClientError::network)?
            .as_string()
            .ok_or_else(|| ClientError::Decode("identity body was not text".to_string()))?;
        serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
