use std::future::Future;

use super::error::ReportError;
use super::service::Leaderboard;
use super::store::ScoreStore;
use super::types::{LeaderboardEntry, ScoreSubmission};

/// Talks to whatever keeps the shared leaderboard. Results are for display only.
pub trait ScoreReporter: Send + Sync + Clone + 'static {
    /// Returns the confirmation message on success.
    fn submit_score(
        &self,
        submission: ScoreSubmission,
    ) -> impl Future<Output = Result<String, ReportError>> + Send;

    fn fetch_leaderboard(&self) -> impl Future<Output = Result<Vec<LeaderboardEntry>, ReportError>> + Send;
}

/// In-process leaderboard for offline play.
pub struct LocalScoreReporter<S: ScoreStore> {
    leaderboard: Leaderboard<S>,
}

impl<S: ScoreStore> Clone for LocalScoreReporter<S> {
    fn clone(&self) -> Self {
        Self {
            leaderboard: self.leaderboard.clone(),
        }
    }
}

impl<S: ScoreStore> LocalScoreReporter<S> {
    pub fn new(leaderboard: Leaderboard<S>) -> Self {
        Self { leaderboard }
    }
}

impl<S: ScoreStore> ScoreReporter for LocalScoreReporter<S> {
    async fn submit_score(&self, submission: ScoreSubmission) -> Result<String, ReportError> {
        self.leaderboard.submit(submission)?;
        Ok("Score saved successfully".to_string())
    }

    async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ReportError> {
        Ok(self.leaderboard.top()?)
    }
}
