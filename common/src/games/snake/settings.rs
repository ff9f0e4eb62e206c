use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::defaults;
use super::grid::Board;
use super::types::{Cell, Direction};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub board_size: i32,
    pub grid_unit: i32,
    pub tick_interval_ms: u32,
    pub food_reward: u32,
    pub start_x: i32,
    pub start_y: i32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: defaults::BOARD_SIZE,
            grid_unit: defaults::GRID_UNIT,
            tick_interval_ms: defaults::TICK_INTERVAL_MS,
            food_reward: defaults::FOOD_REWARD,
            start_x: defaults::START_X,
            start_y: defaults::START_Y,
        }
    }
}

impl GameSettings {
    pub fn board(&self) -> Result<Board, String> {
        Board::new(self.board_size, self.grid_unit)
    }

    pub fn start_cell(&self) -> Cell {
        Cell::new(self.start_x, self.start_y)
    }

    pub fn start_direction(&self) -> Direction {
        Direction::Right
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        let board = self.board()?;
        if board.cells_per_side() > defaults::MAX_CELLS_PER_SIDE {
            return Err(format!(
                "board must be at most {} cells wide, got {}",
                defaults::MAX_CELLS_PER_SIDE,
                board.cells_per_side()
            ));
        }
        if !board.contains_aligned(self.start_cell()) {
            return Err(format!(
                "start cell ({}, {}) must be grid aligned and inside the board",
                self.start_x, self.start_y
            ));
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 2000 {
            return Err("tick_interval_ms must be between 50 and 2000".to_string());
        }
        if self.food_reward == 0 {
            return Err("food_reward must be greater than 0".to_string());
        }
        Ok(())
    }
}
