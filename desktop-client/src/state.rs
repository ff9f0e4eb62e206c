use std::sync::{Arc, Mutex, MutexGuard};

use common::games::GameOverSummary;
use common::games::snake::{Direction, SnakeSnapshot};
use common::leaderboard::LeaderboardEntry;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    Start,
    Pause,
    Reset,
    PlayAgain,
    Turn(Direction),
    SubmitScore { player_name: String },
    RefreshLeaderboard,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    NotSubmitted,
    Sending,
    Saved(String),
    Failed(String),
}

impl SubmitStatus {
    /// A score already sent, or on its way, is not sent again.
    pub fn allows_submit(&self) -> bool {
        matches!(self, SubmitStatus::NotSubmitted | SubmitStatus::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeaderboardView {
    NotLoaded,
    Loading,
    Loaded(Vec<LeaderboardEntry>),
    Failed(String),
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Everything the UI thread reads. Written by the background task only.
pub struct SharedState {
    round: Arc<Mutex<u64>>,
    snapshot: Arc<Mutex<Option<SnakeSnapshot>>>,
    game_over: Arc<Mutex<Option<GameOverSummary>>>,
    submit_status: Arc<Mutex<SubmitStatus>>,
    leaderboard: Arc<Mutex<LeaderboardView>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            round: Arc::new(Mutex::new(0)),
            snapshot: Arc::new(Mutex::new(None)),
            game_over: Arc::new(Mutex::new(None)),
            submit_status: Arc::new(Mutex::new(SubmitStatus::NotSubmitted)),
            leaderboard: Arc::new(Mutex::new(LeaderboardView::NotLoaded)),
        }
    }

    pub fn set_snapshot(&self, snapshot: SnakeSnapshot) {
        *lock(&self.snapshot) = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<SnakeSnapshot> {
        lock(&self.snapshot).clone()
    }

    pub fn set_game_over(&self, summary: GameOverSummary) {
        let mut round = lock(&self.round);
        *round += 1;
        *lock(&self.game_over) = Some(summary);
        *lock(&self.submit_status) = SubmitStatus::NotSubmitted;
    }

    pub fn game_over(&self) -> Option<GameOverSummary> {
        lock(&self.game_over).clone()
    }

    /// Forgets the finished round once a new one begins.
    pub fn clear_round_result(&self) {
        let mut round = lock(&self.round);
        *round += 1;
        *lock(&self.game_over) = None;
        *lock(&self.submit_status) = SubmitStatus::NotSubmitted;
    }

    /// Bumped every time a round result is recorded or cleared.
    pub fn round(&self) -> u64 {
        *lock(&self.round)
    }

    pub fn set_submit_status(&self, status: SubmitStatus) {
        *lock(&self.submit_status) = status;
    }

    /// Writes `status` only if no round has started or finished since `round` was read.
    pub fn set_submit_status_for_round(&self, round: u64, status: SubmitStatus) -> bool {
        let current = lock(&self.round);
        if *current != round {
            return false;
        }
        *lock(&self.submit_status) = status;
        true
    }

    pub fn submit_status(&self) -> SubmitStatus {
        lock(&self.submit_status).clone()
    }

    pub fn set_leaderboard(&self, view: LeaderboardView) {
        *lock(&self.leaderboard) = view;
    }

    pub fn leaderboard(&self) -> LeaderboardView {
        lock(&self.leaderboard).clone()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            round: Arc::clone(&self.round),
            snapshot: Arc::clone(&self.snapshot),
            game_over: Arc::clone(&self.game_over),
            submit_status: Arc::clone(&self.submit_status),
            leaderboard: Arc::clone(&self.leaderboard),
        }
    }
}
