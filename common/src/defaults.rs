//! Gameplay and leaderboard constants shared by every crate in the workspace.

use std::time::Duration;

/// Side length of the square board in pixels.
pub const BOARD_SIZE: i32 = 400;

/// Size of one grid cell in pixels. `BOARD_SIZE` is an exact multiple of it.
pub const GRID_UNIT: i32 = 20;

/// Upper bound on board width in cells. Food placement scans every cell.
pub const MAX_CELLS_PER_SIDE: i32 = 200;

pub const TICK_INTERVAL_MS: u32 = 150;

pub const FOOD_REWARD: u32 = 10;

pub const START_X: i32 = 200;
pub const START_Y: i32 = 200;

pub const LEADERBOARD_LIMIT: usize = 10;

pub const MAX_PLAYER_NAME_LEN: usize = 20;

pub const DEFAULT_HTTP_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_GRPC_ADDRESS: &str = "[::1]:5001";
pub const DEFAULT_SERVER_URL: &str = "http://[::1]:5001";

pub fn tick_interval() -> Duration {
    Duration::from_millis(TICK_INTERVAL_MS as u64)
}
