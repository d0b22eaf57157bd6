//! Durable Object holding one leaderboard collection
//!
//! Each user's best score is its own storage document (`score:<user_id>`);
//! the `users` key lists the documents so the collection can be reloaded
//! after the object is evicted.

pub mod board;
#[cfg(test)]
mod tests;

use board::{Board, PendingWrite, WasmEnv};
use proto::*;
use std::cell::RefCell;
use worker::*;

const INDEX_KEY: &str = "users";

fn doc_key(user_id: &str) -> String {
    format!("score:{}", user_id)
}

#[durable_object]
pub struct LeaderboardDO {
    state: State,
    #[allow(dead_code)]
    env: Env,
    board: RefCell<Option<Board>>,
}

impl DurableObject for LeaderboardDO {
    fn new(state: State, env: Env) -> Self {
        Self {
            state,
            env,
            board: RefCell::new(None),
        }
    }

    #[allow(clippy::await_holding_refcell_ref)] // Borrows are dropped before every await
    async fn fetch(&self, mut req: Request) -> Result<Response> {
        if req.method() != Method::Post {
            return Response::error("Expected POST", 405);
        }

        let bytes = req.bytes().await?;
        let msg = match C2S::from_bytes(&bytes) {
            Ok(msg) => msg,
            Err(e) => {
                console_error!("DO: Failed to parse C2S message: {e:?}");
                return Self::respond(&S2C::Error {
                    message: "malformed request".to_string(),
                });
            }
        };

        self.ensure_loaded().await?;

        let (reply, write) = {
            let board = self.board.borrow();
            match board.as_ref() {
                Some(board) => board.handle(msg),
                None => return Response::error("Leaderboard unavailable", 500),
            }
        };

        if let Some(write) = write {
            if let Err(e) = self.persist(&write).await {
                console_error!("DO: Failed to persist score for {}: {e:?}", write.entry.user_id);
                return Self::respond(&S2C::Error {
                    message: "could not save score".to_string(),
                });
            }
            if let Some(board) = self.board.borrow_mut().as_mut() {
                board.commit(write.entry);
            }
        }

        Self::respond(&reply)
    }
}

impl LeaderboardDO {
    /// Load every stored document into memory on first use
    async fn ensure_loaded(&self) -> Result<()> {
        if self.board.borrow().is_some() {
            return Ok(());
        }

        let storage = self.state.storage();
        let users: Vec<String> = storage
            .get::<Vec<String>>(INDEX_KEY)
            .await?
            .unwrap_or_default();

        let mut stored = Vec::with_capacity(users.len());
        for user_id in &users {
            match storage.get::<ScoreEntry>(&doc_key(user_id)).await? {
                Some(entry) => stored.push(entry),
                None => console_error!("DO: Index lists {} but no document found", user_id),
            }
        }

        console_log!("DO: Loaded {} leaderboard entries", stored.len());
        *self.board.borrow_mut() = Some(Board::from_entries(Box::new(WasmEnv), stored));
        Ok(())
    }

    async fn persist(&self, write: &PendingWrite) -> Result<()> {
        let mut storage = self.state.storage();
        storage
            .put(&doc_key(&write.entry.user_id), &write.entry)
            .await?;

        if write.new_user {
            let mut users: Vec<String> = storage
                .get::<Vec<String>>(INDEX_KEY)
                .await?
                .unwrap_or_default();
            if !users.contains(&write.entry.user_id) {
                users.push(write.entry.user_id.clone());
                storage.put(INDEX_KEY, &users).await?;
            }
        }

        Ok(())
    }

    fn respond(msg: &S2C) -> Result<Response> {
        let bytes = msg
            .to_bytes()
            .map_err(|e| Error::RustError(format!("Failed to serialize S2C: {e:?}")))?;
        let mut resp = Response::from_bytes(bytes)?;
        resp.headers_mut()
            .set("Content-Type", "application/octet-stream")?;
        Ok(resp)
    }
}
