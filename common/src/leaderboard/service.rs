use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::defaults;
use crate::log;
use super::error::LeaderboardError;
use super::ranking::{rank_entries, truncate_name};
use super::store::ScoreStore;
use super::types::{LeaderboardEntry, ScoreRecord, ScoreSubmission};

pub struct Leaderboard<S: ScoreStore> {
    store: Arc<S>,
    limit: usize,
    max_name_len: usize,
}

impl<S: ScoreStore> Clone for Leaderboard<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            limit: self.limit,
            max_name_len: self.max_name_len,
        }
    }
}

impl<S: ScoreStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Self::with_limits(store, defaults::LEADERBOARD_LIMIT, defaults::MAX_PLAYER_NAME_LEN)
    }

    pub fn with_limits(store: S, limit: usize, max_name_len: usize) -> Self {
        Self {
            store: Arc::new(store),
            limit,
            max_name_len,
        }
    }

    pub fn submit(&self, submission: ScoreSubmission) -> Result<ScoreRecord, LeaderboardError> {
        self.submit_at(submission, Utc::now())
    }

    /// Name is trimmed then cut to `max_name_len` characters. A negative or non-finite duration is stored as 0.
    pub fn submit_at(
        &self,
        submission: ScoreSubmission,
        created_at: DateTime<Utc>,
    ) -> Result<ScoreRecord, LeaderboardError> {
        let name = submission.player_name.trim();
        if name.is_empty() {
            return Err(LeaderboardError::InvalidSubmission(
                "player_name is required".to_string(),
            ));
        }

        let game_duration = if submission.game_duration.is_finite() && submission.game_duration >= 0.0 {
            submission.game_duration
        } else {
            0.0
        };

        let record = ScoreRecord {
            player_name: truncate_name(name, self.max_name_len),
            score: submission.score,
            game_duration,
            created_at,
        };
        self.store.insert(record.clone())?;
        log!("Stored score {} for {}", record.score, record.player_name);
        Ok(record)
    }

    pub fn top(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let records = self.store.records()?;
        Ok(rank_entries(&records, self.limit))
    }
}
