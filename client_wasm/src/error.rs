use game_core::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong in the browser client. All of it ends up on
/// the status line; none of it stops the game.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("browser window unavailable")]
    NoWindow,

    #[error("local storage unavailable")]
    NoStorage,

    #[error("network error: {0}")]
    Network(String),

    #[error("server returned HTTP {0}")]
    Http(u16),

    #[error("could not encode request: {0}")]
    Encode(String),

    #[error("could not decode reply: {0}")]
    Decode(String),

    #[error("leaderboard error: {0}")]
    Server(String),

    #[error("not signed in")]
    NotSignedIn,

    #[error("graphics error: {0}")]
    Graphics(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Wrap a JS exception, which only carries a debug representation
    pub fn network(value: JsValue) -> Self {
        ClientError::Network(format!("{:?}", value))
    }
}

impl From<ClientError> for JsValue {
    fn from(e: ClientError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
