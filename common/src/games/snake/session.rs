use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::games::{GameBroadcaster, GameOverSummary, SessionRng, TickControl, TickScheduler};
use crate::log;
use super::game_state::SnakeGameState;
use super::high_score::{HighScoreStore, HighScoreTracker};
use super::settings::GameSettings;
use super::types::{Direction, GameStatus, SnakeSnapshot, TickOutcome};

#[derive(Clone)]
pub struct SnakeSessionState {
    pub game_state: Arc<Mutex<SnakeGameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub high_score: Arc<Mutex<HighScoreTracker>>,
    pub tick_interval: Duration,
}

impl SnakeSessionState {
    pub fn create(settings: &GameSettings, seed: u64, stored_high_score: u32) -> Result<Self, String> {
        let mut rng = SessionRng::new(seed);
        let game_state = SnakeGameState::new(settings, &mut rng)?;

        Ok(Self {
            game_state: Arc::new(Mutex::new(game_state)),
            rng: Arc::new(Mutex::new(rng)),
            high_score: Arc::new(Mutex::new(HighScoreTracker::new(stored_high_score))),
            tick_interval: settings.tick_interval(),
        })
    }

    pub async fn snapshot(&self) -> SnakeSnapshot {
        let game_state = self.game_state.lock().await;
        let high_score = self.high_score.lock().await.best();
        game_state.snapshot(high_score)
    }
}

/// Drives one `SnakeGameState` in real time. The tick timer runs only while the game is Running.
pub struct SnakeSession<B: GameBroadcaster, H: HighScoreStore> {
    state: SnakeSessionState,
    broadcaster: B,
    high_score_store: Arc<H>,
    scheduler: TickScheduler,
}

impl<B: GameBroadcaster, H: HighScoreStore> SnakeSession<B, H> {
    pub fn new(settings: &GameSettings, seed: u64, broadcaster: B, high_score_store: H) -> Result<Self, String> {
        let stored_high_score = high_score_store.load();
        let state = SnakeSessionState::create(settings, seed, stored_high_score)?;
        let scheduler = TickScheduler::new(state.tick_interval);

        Ok(Self {
            state,
            broadcaster,
            high_score_store: Arc::new(high_score_store),
            scheduler,
        })
    }

    pub fn state(&self) -> &SnakeSessionState {
        &self.state
    }

    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_running()
    }

    pub async fn snapshot(&self) -> SnakeSnapshot {
        self.state.snapshot().await
    }

    /// Publishes the current snapshot without changing anything.
    pub async fn publish(&self) {
        let snapshot = self.state.snapshot().await;
        self.broadcaster.broadcast_state(snapshot).await;
    }

    pub async fn start(&mut self) {
        let previous = {
            let mut game_state = self.state.game_state.lock().await;
            let previous = game_state.status();
            let mut rng = self.state.rng.lock().await;
            game_state.start(&mut rng);
            previous
        };

        if previous == GameStatus::Running && self.scheduler.is_running() {
            return;
        }
        if previous == GameStatus::GameOver {
            self.state.high_score.lock().await.begin_round();
        }

        log!("Snake game started (was {:?}), ticking every {:?}", previous, self.scheduler.period());
        self.start_ticking();
        self.publish().await;
    }

    pub async fn pause(&mut self) {
        let was_running = {
            let mut game_state = self.state.game_state.lock().await;
            let was_running = game_state.is_running();
            game_state.pause();
            was_running
        };

        if was_running {
            self.scheduler.stop();
            self.publish().await;
        }
    }

    pub async fn reset(&mut self) {
        self.scheduler.stop();
        {
            let mut game_state = self.state.game_state.lock().await;
            let mut rng = self.state.rng.lock().await;
            game_state.reset(&mut rng);
        }
        self.state.high_score.lock().await.begin_round();
        self.publish().await;
    }

    pub async fn play_again(&mut self) {
        self.reset().await;
        self.start().await;
    }

    pub async fn set_direction(&self, direction: Direction) {
        self.state.game_state.lock().await.set_pending(direction);
    }

    fn start_ticking(&mut self) {
        let state = self.state.clone();
        let broadcaster = self.broadcaster.clone();
        let high_score_store = self.high_score_store.clone();

        self.scheduler.start(move || {
            let state = state.clone();
            let broadcaster = broadcaster.clone();
            let high_score_store = high_score_store.clone();
            async move { run_tick(&state, &broadcaster, high_score_store.as_ref()).await }
        });
    }
}

async fn run_tick<B: GameBroadcaster, H: HighScoreStore>(
    state: &SnakeSessionState,
    broadcaster: &B,
    high_score_store: &H,
) -> TickControl {
    let mut game_state = state.game_state.lock().await;
    let mut rng = state.rng.lock().await;
    let outcome = game_state.advance(&mut rng);
    drop(rng);

    if outcome == TickOutcome::Ignored {
        return TickControl::Stop;
    }

    let mut high_score = state.high_score.lock().await;
    if high_score.observe(game_state.score())
        && let Err(e) = high_score_store.save(high_score.best())
    {
        log!("Failed to save high score {}: {}", high_score.best(), e);
    }

    let snapshot = game_state.snapshot(high_score.best());
    let summary = match outcome {
        TickOutcome::GameOver { reason, score } => Some(GameOverSummary {
            score,
            reason,
            ticks: game_state.ticks(),
            duration: state.tick_interval * u32::try_from(game_state.ticks()).unwrap_or(u32::MAX),
            new_high_score: high_score.is_round_record(score),
        }),
        _ => None,
    };
    drop(high_score);
    drop(game_state);

    broadcaster.broadcast_state(snapshot).await;

    match summary {
        Some(summary) => {
            broadcaster.broadcast_game_over(summary).await;
            TickControl::Stop
        }
        None => TickControl::Continue,
    }
}
