use serde::{Deserialize, Serialize};

/// A grid-aligned point on the board, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Displacement of one step, scaled by the grid unit. Screen coordinates: `Up` is `-y`.
    pub fn displacement(&self, unit: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -unit),
            Direction::Down => (0, unit),
            Direction::Left => (-unit, 0),
            Direction::Right => (unit, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Idle,
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell; no food can be placed. Counts as a win.
    BoardFull,
}

impl GameEndReason {
    pub fn is_win(&self) -> bool {
        matches!(self, GameEndReason::BoardFull)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            GameEndReason::WallCollision => "hit the wall",
            GameEndReason::SelfCollision => "ran into itself",
            GameEndReason::BoardFull => "filled the whole board",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session was not running; nothing changed.
    Ignored,
    Moved,
    AteFood { score: u32 },
    GameOver { reason: GameEndReason, score: u32 },
}

impl TickOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, TickOutcome::GameOver { .. })
    }
}

/// Read-only view handed to renderers and broadcasters.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSnapshot {
    pub segments: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub end_reason: Option<GameEndReason>,
    pub board_size: i32,
    pub grid_unit: i32,
    pub ticks: u64,
}
