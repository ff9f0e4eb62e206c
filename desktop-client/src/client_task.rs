use tokio::sync::mpsc;

use common::games::snake::{HighScoreStore, SnakeSession};
use common::leaderboard::{ScoreReporter, ScoreSubmission};
use common::log;
use crate::offline::LocalBroadcaster;
use crate::state::{ClientCommand, LeaderboardView, SharedState, SubmitStatus};

/// Owns the game session and applies UI commands until the UI drops its sender.
/// Score calls run as separate tasks so a slow server never delays a tick.
pub async fn run_client_task<R, H>(
    mut session: SnakeSession<LocalBroadcaster, H>,
    reporter: R,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) where
    R: ScoreReporter,
    H: HighScoreStore,
{
    session.publish().await;
    refresh_leaderboard(&reporter, &shared_state);

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::Start => {
                if shared_state.game_over().is_some() {
                    shared_state.clear_round_result();
                }
                session.start().await;
            }
            ClientCommand::Pause => session.pause().await,
            ClientCommand::Reset => {
                shared_state.clear_round_result();
                session.reset().await;
            }
            ClientCommand::PlayAgain => {
                shared_state.clear_round_result();
                session.play_again().await;
            }
            ClientCommand::Turn(direction) => session.set_direction(direction).await,
            ClientCommand::SubmitScore { player_name } => {
                submit_score(&reporter, &shared_state, &player_name);
            }
            ClientCommand::RefreshLeaderboard => refresh_leaderboard(&reporter, &shared_state),
        }
    }

    log!("Command channel closed, stopping game session");
}

fn submit_score<R: ScoreReporter>(reporter: &R, shared_state: &SharedState, player_name: &str) {
    let Some(summary) = shared_state.game_over() else {
        log!("Ignoring score submission outside of game over");
        return;
    };
    if !shared_state.submit_status().allows_submit() {
        return;
    }

    let player_name = player_name.trim();
    if player_name.is_empty() {
        shared_state.set_submit_status(SubmitStatus::Failed("Please enter your name".to_string()));
        return;
    }

    shared_state.set_submit_status(SubmitStatus::Sending);
    let round = shared_state.round();
    let submission = ScoreSubmission::new(player_name, summary.score, summary.duration.as_secs_f64());
    let reporter = reporter.clone();
    let shared_state = shared_state.clone();

    tokio::spawn(async move {
        match reporter.submit_score(submission).await {
            Ok(message) => {
                if !shared_state.set_submit_status_for_round(round, SubmitStatus::Saved(message)) {
                    log!("Score saved after its round ended");
                }
                load_leaderboard(&reporter, &shared_state).await;
            }
            Err(e) => {
                log!("Failed to submit score: {}", e);
                shared_state.set_submit_status_for_round(round, SubmitStatus::Failed(e.to_string()));
            }
        }
    });
}

fn refresh_leaderboard<R: ScoreReporter>(reporter: &R, shared_state: &SharedState) {
    let reporter = reporter.clone();
    let shared_state = shared_state.clone();
    tokio::spawn(async move {
        load_leaderboard(&reporter, &shared_state).await;
    });
}

async fn load_leaderboard<R: ScoreReporter>(reporter: &R, shared_state: &SharedState) {
    shared_state.set_leaderboard(LeaderboardView::Loading);
    match reporter.fetch_leaderboard().await {
        Ok(entries) => shared_state.set_leaderboard(LeaderboardView::Loaded(entries)),
        Err(e) => {
            log!("Failed to load leaderboard: {}", e);
            shared_state.set_leaderboard(LeaderboardView::Failed(e.to_string()));
        }
    }
}
