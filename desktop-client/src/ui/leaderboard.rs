use eframe::egui;
use common::leaderboard::LeaderboardEntry;

use crate::state::LeaderboardView;
use super::colors;

pub fn format_entry(rank: usize, entry: &LeaderboardEntry) -> (String, String, String) {
    (
        format!("{}.", rank),
        entry.player_name.clone(),
        entry.score.to_string(),
    )
}

/// Returns true when the player asked for a refresh.
pub fn render_leaderboard(ui: &mut egui::Ui, view: &LeaderboardView) -> bool {
    let mut refresh = false;

    ui.horizontal(|ui| {
        ui.heading("Leaderboard");
        if ui.button("🔄").on_hover_text("Refresh").clicked() {
            refresh = true;
        }
    });
    ui.separator();

    match view {
        LeaderboardView::NotLoaded => {
            ui.label("Not loaded yet");
        }
        LeaderboardView::Loading => {
            ui.spinner();
        }
        LeaderboardView::Failed(error) => {
            ui.colored_label(colors::ERROR_TEXT, format!("Could not load scores: {}", error));
        }
        LeaderboardView::Loaded(entries) if entries.is_empty() => {
            ui.label("No scores yet. Be the first!");
        }
        LeaderboardView::Loaded(entries) => {
            egui::Grid::new("leaderboard_grid")
                .striped(true)
                .num_columns(3)
                .show(ui, |ui| {
                    for (i, entry) in entries.iter().enumerate() {
                        let (rank, name, score) = format_entry(i + 1, entry);
                        ui.label(rank);
                        ui.label(name);
                        ui.label(score);
                        ui.end_row();
                    }
                });
        }
    }

    refresh
}
