use js_sys::Date;
use proto::*;
use std::collections::HashMap;
use thiserror::Error;
use worker::*;

// Abstract environment (Time, Logging)
pub trait Environment {
    fn now(&self) -> u64; // ms
    fn log(&self, msg: String);
}

pub struct WasmEnv;

impl Environment for WasmEnv {
    fn now(&self) -> u64 {
        Date::now() as u64
    }

    fn log(&self, msg: String) {
        console_log!("{}", msg);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid user id")]
    InvalidUserId,
    #[error("score must be positive")]
    EmptyScore,
}

/// What happened to a submitted score
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Written; `previous` is the best it replaced
    Stored {
        entry: ScoreEntry,
        previous: Option<u32>,
    },
    /// Not strictly greater than the stored best, nothing written
    Kept { best: u32 },
}

/// A document the Durable Object must persist after handling a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub entry: ScoreEntry,
    pub new_user: bool,
}

/// In-memory view of one leaderboard collection, one entry per user
pub struct Board {
    pub env: Box<dyn Environment>,
    entries: HashMap<String, ScoreEntry>,
}

impl Board {
    pub fn new(env: Box<dyn Environment>) -> Self {
        Self {
            env,
            entries: HashMap::new(),
        }
    }

    /// Rebuild from stored documents. Keeps the higher score if a user appears twice
    pub fn from_entries(env: Box<dyn Environment>, stored: Vec<ScoreEntry>) -> Self {
        let mut board = Self::new(env);
        for entry in stored {
            let keep = board
                .entries
                .get(&entry.user_id)
                .map_or(true, |existing| entry.score > existing.score);
            if keep {
                board.entries.insert(entry.user_id.clone(), entry);
            }
        }
        board
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self, user_id: &str) -> Option<u32> {
        self.entries.get(user_id).map(|e| e.score)
    }

    /// Decide whether `score` is a new best. Nothing changes in memory until
    /// the caller has persisted the entry and calls [`Board::commit`]
    pub fn submit(
        &self,
        user_id: &str,
        player_name: &str,
        score: u32,
    ) -> std::result::Result<SubmitOutcome, BoardError> {
        if !is_valid_user_id(user_id) {
            return Err(BoardError::InvalidUserId);
        }
        if score == 0 {
            return Err(BoardError::EmptyScore);
        }

        let previous = self.best(user_id);
        if let Some(best) = previous {
            if score <= best {
                return Ok(SubmitOutcome::Kept { best });
            }
        }

        let entry = ScoreEntry::new(user_id, player_name, score, self.env.now());
        Ok(SubmitOutcome::Stored { entry, previous })
    }

    /// Apply an entry that storage has accepted. Returns false if it no longer
    /// beats the best held in memory
    pub fn commit(&mut self, entry: ScoreEntry) -> bool {
        let previous = self.best(&entry.user_id);
        if previous.is_some_and(|best| entry.score <= best) {
            return false;
        }

        self.env.log(format!(
            "DO: New best for {}: {} (was {:?})",
            entry.user_id, entry.score, previous
        ));
        self.entries.insert(entry.user_id.clone(), entry);
        true
    }

    /// Top `limit` entries, ranked
    pub fn top(&self, limit: usize) -> Vec<ScoreEntry> {
        let mut entries: Vec<ScoreEntry> = self.entries.values().cloned().collect();
        rank_entries(&mut entries);
        entries.truncate(limit);
        entries
    }

    /// Answer one request. Returns the reply and the document to persist, if any.
    /// A returned write must be committed once storage has it
    pub fn handle(&self, msg: C2S) -> (S2C, Option<PendingWrite>) {
        match msg {
            C2S::FetchBest { user_id } => (
                S2C::Best {
                    score: self.best(&user_id),
                },
                None,
            ),
            C2S::SubmitScore {
                user_id,
                player_name,
                score,
            } => match self.submit(&user_id, &player_name, score) {
                Ok(SubmitOutcome::Stored { entry, previous }) => {
                    let write = PendingWrite {
                        entry: entry.clone(),
                        new_user: previous.is_none(),
                    };
                    (S2C::ScoreAccepted { entry, previous }, Some(write))
                }
                Ok(SubmitOutcome::Kept { best }) => (S2C::ScoreKept { best }, None),
                Err(e) => {
                    self.env
                        .log(format!("DO: Rejected submit from {:?}: {}", user_id, e));
                    (
                        S2C::Error {
                            message: e.to_string(),
                        },
                        None,
                    )
                }
            },
            C2S::FetchLeaderboard { limit } => {
                let limit = if limit == 0 {
                    DEFAULT_LEADERBOARD_LIMIT
                } else {
                    limit
                };
                (
                    S2C::Leaderboard {
                        entries: self.top(limit as usize),
                    },
                    None,
                )
            }
        }
    }
}
