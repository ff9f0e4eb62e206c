use common::games::snake::SnakeSnapshot;
use common::games::{GameBroadcaster, GameOverSummary};
use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: SnakeSnapshot) {
        self.shared_state.set_snapshot(snapshot);
    }

    async fn broadcast_game_over(&self, summary: GameOverSummary) {
        self.shared_state.set_game_over(summary);
    }
}
