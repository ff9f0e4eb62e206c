use std::time::Duration;

use eframe::egui;
use common::games::snake::{Direction, GameStatus, SnakeSnapshot};
use common::log;
use tokio::sync::mpsc;

use crate::config::{Config, ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use crate::state::{ClientCommand, SharedState};
use super::board::render_board;
use super::game_over::{GameOverAction, render_game_over_window};
use super::leaderboard::render_leaderboard;

const REPAINT_INTERVAL: Duration = Duration::from_millis(16);

pub struct SnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    config_manager: ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>,
    mode_label: String,
    player_name_input: String,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        config_manager: ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>,
        player_name: String,
        mode_label: String,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            config_manager,
            mode_label,
            player_name_input: player_name,
        }
    }

    fn send(&self, command: ClientCommand) {
        if self.command_tx.send(command).is_err() {
            log!("Game task is gone, dropping command");
        }
    }

    fn handle_input(&self, ctx: &egui::Context) {
        let direction = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) {
                Some(Direction::Up)
            } else if i.key_pressed(egui::Key::ArrowDown) {
                Some(Direction::Down)
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) {
                Some(Direction::Right)
            } else {
                None
            }
        });

        if let Some(direction) = direction {
            self.send(ClientCommand::Turn(direction));
        }
    }

    fn render_controls(&self, ui: &mut egui::Ui, status: GameStatus) {
        ui.horizontal(|ui| {
            let start_label = if status == GameStatus::Paused { "Resume" } else { "Start" };
            if ui
                .add_enabled(status != GameStatus::Running, egui::Button::new(start_label))
                .clicked()
            {
                self.send(ClientCommand::Start);
            }
            if ui
                .add_enabled(status == GameStatus::Running, egui::Button::new("Pause"))
                .clicked()
            {
                self.send(ClientCommand::Pause);
            }
            if ui.button("Reset").clicked() {
                self.send(ClientCommand::Reset);
            }
        });
    }

    fn render_game(&self, ui: &mut egui::Ui, snapshot: &SnakeSnapshot) {
        ui.horizontal(|ui| {
            ui.heading(format!("Score: {}", snapshot.score));
            ui.separator();
            ui.heading(format!("High Score: {}", snapshot.high_score));
        });
        ui.separator();

        render_board(ui, snapshot);

        ui.add_space(8.0);
        self.render_controls(ui, snapshot.status);
        ui.label("Use the arrow keys to steer.");
    }

    fn save_score(&mut self) {
        let player_name = self.player_name_input.trim().to_string();
        if let Err(e) = self
            .config_manager
            .update(|config| config.player_name = player_name.clone())
        {
            log!("Failed to remember player name: {}", e);
        }
        self.send(ClientCommand::SubmitScore { player_name });
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.shared_state.snapshot();
        let game_over = self.shared_state.game_over();

        if game_over.is_none() {
            self.handle_input(ctx);
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.mode_label);
        });

        egui::SidePanel::right("leaderboard_panel")
            .resizable(false)
            .min_width(180.0)
            .show(ctx, |ui| {
                if render_leaderboard(ui, &self.shared_state.leaderboard()) {
                    self.send(ClientCommand::RefreshLeaderboard);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| match &snapshot {
            Some(snapshot) => self.render_game(ui, snapshot),
            None => {
                ui.heading("Starting...");
                ui.spinner();
            }
        });

        if let Some(summary) = game_over {
            let status = self.shared_state.submit_status();
            match render_game_over_window(ctx, &summary, &status, &mut self.player_name_input) {
                GameOverAction::None => {}
                GameOverAction::SaveScore => self.save_score(),
                GameOverAction::PlayAgain => self.send(ClientCommand::PlayAgain),
            }
        }

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
