mod game_state;
mod grid;
mod high_score;
mod input;
mod session;
mod settings;
mod snake;
mod types;

pub use game_state::SnakeGameState;
pub use grid::{Board, BoardFull};
pub use high_score::{ConfigHighScoreStore, HighScoreRecord, HighScoreStore, HighScoreTracker};
pub use input::InputController;
pub use session::{SnakeSession, SnakeSessionState};
pub use settings::GameSettings;
pub use snake::Snake;
pub use types::{Cell, Direction, GameEndReason, GameStatus, SnakeSnapshot, TickOutcome};
