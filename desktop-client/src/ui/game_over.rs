use eframe::egui;
use common::defaults::MAX_PLAYER_NAME_LEN;
use common::games::GameOverSummary;

use crate::state::SubmitStatus;
use super::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverAction {
    None,
    SaveScore,
    PlayAgain,
}

pub fn headline(summary: &GameOverSummary) -> &'static str {
    if summary.reason.is_win() {
        "You filled the board!"
    } else {
        "Game Over!"
    }
}

pub fn render_game_over_window(
    ctx: &egui::Context,
    summary: &GameOverSummary,
    status: &SubmitStatus,
    player_name: &mut String,
) -> GameOverAction {
    let mut action = GameOverAction::None;

    egui::Window::new("Game Over")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(headline(summary));
                ui.label(format!("Snake {}", summary.reason.describe()));
                ui.label(format!("Final score: {}", summary.score));
                if summary.new_high_score {
                    ui.colored_label(colors::SUCCESS_TEXT, "New high score!");
                }
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Your name:");
                let can_edit = status.allows_submit();
                let edit = ui.add_enabled(
                    can_edit,
                    egui::TextEdit::singleline(player_name).char_limit(MAX_PLAYER_NAME_LEN),
                );
                if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) && can_edit {
                    action = GameOverAction::SaveScore;
                }
            });

            match status {
                SubmitStatus::NotSubmitted => {}
                SubmitStatus::Sending => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Saving score...");
                    });
                }
                SubmitStatus::Saved(message) => {
                    ui.colored_label(colors::SUCCESS_TEXT, message);
                }
                SubmitStatus::Failed(error) => {
                    ui.colored_label(colors::ERROR_TEXT, error);
                }
            }

            ui.horizontal(|ui| {
                let can_save = status.allows_submit() && !player_name.trim().is_empty();
                if ui.add_enabled(can_save, egui::Button::new("Save Score")).clicked() {
                    action = GameOverAction::SaveScore;
                }
                if ui.button("Play Again").clicked() {
                    action = GameOverAction::PlayAgain;
                }
            });
        });

    action
}
