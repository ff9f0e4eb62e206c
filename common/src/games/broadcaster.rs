use std::future::Future;
use std::time::Duration;

use super::snake::{GameEndReason, SnakeSnapshot};

#[derive(Clone, Debug, PartialEq)]
pub struct GameOverSummary {
    pub score: u32,
    pub reason: GameEndReason,
    pub ticks: u64,
    /// Logical play time: ticks multiplied by the tick interval.
    pub duration: Duration,
    pub new_high_score: bool,
}

/// Receives everything a session publishes. Implementations must not block the tick.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SnakeSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}
