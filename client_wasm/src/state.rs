//! HUD state shared between the frame loop and network tasks

use game_core::ShotStats;
use proto::{rank_entries, should_submit, ScoreEntry};

/// One rendered leaderboard line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub name: String,
    pub score: u32,
    pub is_me: bool,
}

/// What the page shows around the canvas
#[derive(Debug, Clone)]
pub struct HudState {
    score: u32,
    // Best score the server has confirmed for this user
    best: Option<u32>,
    shots: ShotStats,
    status: String,
    leaderboard: Vec<ScoreEntry>,
    dirty: bool,
}

impl HudState {
    pub fn new() -> Self {
        Self {
            score: 0,
            best: None,
            shots: ShotStats::default(),
            status: "Signing in...".to_string(),
            leaderboard: Vec::new(),
            dirty: true,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn set_score(&mut self, score: u32) {
        if self.score != score {
            self.score = score;
            self.dirty = true;
        }
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }

    pub fn best_label(&self) -> String {
        self.best.map_or_else(|| "-".to_string(), |b| b.to_string())
    }

    /// Raise the known best. Replies can arrive out of order, so a lower
    /// value never replaces a higher one
    pub fn set_best(&mut self, best: Option<u32>) {
        let best = self.best.max(best);
        if self.best != best {
            self.best = best;
            self.dirty = true;
        }
    }

    pub fn set_shots(&mut self, shots: ShotStats) {
        if self.shots != shots {
            self.shots = shots;
            self.dirty = true;
        }
    }

    /// Makes out of attempts with accuracy, e.g. `3/5 (60%)`
    pub fn shots_label(&self) -> String {
        if self.shots.attempts == 0 {
            return "-".to_string();
        }
        format!(
            "{}/{} ({:.0}%)",
            self.shots.makes,
            self.shots.attempts,
            self.shots.accuracy() * 100.0
        )
    }

    /// Whether the current score is worth sending to the leaderboard
    pub fn should_submit(&self) -> bool {
        should_submit(self.score, self.best)
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.dirty = true;
    }

    /// Replace the leaderboard, ranked best first
    pub fn set_leaderboard(&mut self, mut entries: Vec<ScoreEntry>) {
        rank_entries(&mut entries);
        self.leaderboard = entries;
        self.dirty = true;
    }

    pub fn rows(&self, my_user_id: Option<&str>) -> Vec<LeaderboardRow> {
        self.leaderboard
            .iter()
            .enumerate()
            .map(|(i, e)| LeaderboardRow {
                rank: i + 1,
                name: e.player_name.clone(),
                score: e.score,
                is_me: my_user_id == Some(e.user_id.as_str()),
            })
            .collect()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns true once after any change, for the DOM refresh
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Default for HudState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(user: &str, name: &str, score: u32, ts: u64) -> ScoreEntry {
        ScoreEntry::new(user, name, score, ts)
    }

    #[test]
    fn test_leaderboard_rows_sorted_descending() {
        let mut hud = HudState::new();
        hud.set_leaderboard(vec![
            entry("userAAAA", "Ann", 4, 1),
            entry("userBBBB", "Ben", 16, 2),
            entry("userCCCC", "Cat", 10, 3),
        ]);

        let rows = hud.rows(Some("userCCCC"));
        let scores: Vec<u32> = rows.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![16, 10, 4]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].name, "Ben");
        assert!(rows[1].is_me);
        assert!(!rows[0].is_me);
    }

    #[test]
    fn test_submit_only_above_best() {
        let mut hud = HudState::new();
        hud.set_score(2);
        assert!(hud.should_submit());

        hud.set_best(Some(4));
        assert!(!hud.should_submit());
        hud.set_score(4);
        assert!(!hud.should_submit());
        hud.set_score(6);
        assert!(hud.should_submit());
    }

    #[test]
    fn test_dirty_flag() {
        let mut hud = HudState::new();
        assert!(hud.take_dirty());
        assert!(!hud.take_dirty());

        hud.set_score(0);
        assert!(!hud.take_dirty());

        hud.set_score(2);
        assert!(hud.take_dirty());

        hud.set_status("Saved");
        assert!(hud.take_dirty());
        assert_eq!(hud.status(), "Saved");
    }

    #[test]
    fn test_best_label() {
        let mut hud = HudState::new();
        assert_eq!(hud.best_label(), "-");
        hud.set_best(Some(12));
        assert_eq!(hud.best_label(), "12");
    }

    #[test]
    fn test_best_never_decreases() {
        let mut hud = HudState::new();
        hud.set_best(Some(4));
        hud.take_dirty();

        hud.set_best(Some(2));
        assert_eq!(hud.best(), Some(4));
        hud.set_best(None);
        assert_eq!(hud.best(), Some(4));
        assert!(!hud.take_dirty());

        hud.set_best(Some(6));
        assert_eq!(hud.best(), Some(6));
    }

    #[test]
    fn test_shots_label() {
        let mut hud = HudState::new();
        assert_eq!(hud.shots_label(), "-");

        hud.set_shots(ShotStats {
            attempts: 3,
            makes: 2,
        });
        assert_eq!(hud.shots_label(), "2/3 (67%)");
        assert!(hud.take_dirty());
    }
}
