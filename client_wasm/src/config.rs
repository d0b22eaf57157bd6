//! Browser-side settings

use proto::DEFAULT_LEADERBOARD_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the worker, without a trailing slash
    pub api_base: String,
    pub leaderboard_limit: u8,
}

impl ClientConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
        }
    }

    pub fn identity_url(&self) -> String {
        format!("{}/api/identity", self.api_base)
    }

    pub fn rpc_url(&self) -> String {
        format!("{}/api/rpc", self.api_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_cleanly() {
        let config = ClientConfig::new("https://hoops.example.dev/ ");
        assert_eq!(config.rpc_url(), "https://hoops.example.dev/api/rpc");
        assert_eq!(
            config.identity_url(),
            "https://hoops.example.dev/api/identity"
        );
    }

    #[test]
    fn test_empty_base_gives_relative_urls() {
        let config = ClientConfig::new("");
        assert_eq!(config.rpc_url(), "/api/rpc");
        assert_eq!(config.leaderboard_limit, DEFAULT_LEADERBOARD_LIMIT);
    }
}
