use eframe::egui;
use common::games::snake::{Cell, GameStatus, SnakeSnapshot};

use super::colors;

/// Gap left between neighbouring cells, in pixels.
const CELL_GAP: f32 = 2.0;

pub fn cell_rect(origin: egui::Pos2, cell: Cell, unit: f32) -> egui::Rect {
    let side = (unit - CELL_GAP).max(1.0);
    egui::Rect::from_min_size(
        origin + egui::vec2(cell.x as f32, cell.y as f32),
        egui::vec2(side, side),
    )
}

pub fn status_caption(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Idle => Some("Press Start"),
        GameStatus::Paused => Some("Paused"),
        GameStatus::Running | GameStatus::GameOver => None,
    }
}

/// Draws the board from a snapshot only; never reaches into game state.
pub fn render_board(ui: &mut egui::Ui, snapshot: &SnakeSnapshot) {
    let board_size = snapshot.board_size as f32;
    let unit = snapshot.grid_unit as f32;

    let (response, painter) =
        ui.allocate_painter(egui::Vec2::new(board_size, board_size), egui::Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 0.0, colors::BACKGROUND);

    if let Some(food) = snapshot.food {
        painter.rect_filled(cell_rect(rect.min, food, unit), 0.0, colors::FOOD);
    }

    for (i, segment) in snapshot.segments.iter().enumerate() {
        let color = if i == 0 { colors::SNAKE_HEAD } else { colors::SNAKE_BODY };
        painter.rect_filled(cell_rect(rect.min, *segment, unit), 0.0, color);
    }

    if let Some(caption) = status_caption(snapshot.status) {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            caption,
            egui::FontId::proportional(28.0),
            colors::OVERLAY_TEXT,
        );
    }
}
