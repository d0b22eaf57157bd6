//! Wire protocol between the browser client and the leaderboard
//!
//! Uses postcard for efficient binary serialization of RPC bodies

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Longest player name kept after sanitising
pub const MAX_NAME_LEN: usize = 24;

/// Default number of rows in the leaderboard
pub const DEFAULT_LEADERBOARD_LIMIT: u8 = 10;

/// One user's best score. The document id is the user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub id: String,
    pub score: u32,
    pub player_name: String,
    pub user_id: String,
    pub timestamp: u64, // ms since Unix epoch of the last accepted write
}

impl ScoreEntry {
    pub fn new(user_id: &str, player_name: &str, score: u32, timestamp: u64) -> Self {
        Self {
            id: user_id.to_string(),
            score,
            player_name: sanitize_player_name(player_name, user_id),
            user_id: user_id.to_string(),
            timestamp,
        }
    }
}

// ============================================================================
// C2S Messages (Client to Server)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum C2S {
    /// Read the caller's stored best score
    FetchBest { user_id: String },

    /// Store `score` if it beats the caller's stored best
    SubmitScore {
        user_id: String,
        player_name: String,
        score: u32,
    },

    /// Top `limit` entries, best first
    FetchLeaderboard { limit: u8 },
}

// ============================================================================
// S2C Messages (Server to Client)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum S2C {
    Best { score: Option<u32> },

    /// The submitted score was written
    ScoreAccepted {
        entry: ScoreEntry,
        previous: Option<u32>,
    },

    /// The submitted score did not beat the stored one
    ScoreKept { best: u32 },

    Leaderboard { entries: Vec<ScoreEntry> },

    Error { message: String },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl C2S {
    /// Serialize C2S message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize C2S message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl S2C {
    /// Serialize S2C message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize S2C message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

// ============================================================================
// Leaderboard rules shared by client and server
// ============================================================================

/// Leaderboard order: highest score first, then whoever got there first,
/// then user id so the order is total
pub fn compare_entries(a: &ScoreEntry, b: &ScoreEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(a.timestamp.cmp(&b.timestamp))
        .then_with(|| a.user_id.cmp(&b.user_id))
}

pub fn rank_entries(entries: &mut [ScoreEntry]) {
    entries.sort_by(compare_entries);
}

/// A score is only worth storing if it strictly beats the stored best
pub fn should_submit(candidate: u32, best: Option<u32>) -> bool {
    match best {
        Some(best) => candidate > best,
        None => candidate > 0,
    }
}

/// Trim, drop control characters and cap the length. Empty names fall back
/// to `Player-` plus the first four characters of the user id.
pub fn sanitize_player_name(name: &str, user_id: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_NAME_LEN)
        .collect();
    let cleaned = cleaned.trim_end().to_string();

    if cleaned.is_empty() {
        let suffix: String = user_id.chars().take(4).collect();
        if suffix.is_empty() {
            "Player".to_string()
        } else {
            format!("Player-{}", suffix)
        }
    } else {
        cleaned
    }
}

/// User ids are minted server side as ASCII alphanumerics
pub fn is_valid_user_id(user_id: &str) -> bool {
    (8..=64).contains(&user_id.len()) && user_id.chars().all(|c| c.is_ascii_alphanumeric())
}
