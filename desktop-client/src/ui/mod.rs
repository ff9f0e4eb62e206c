mod app;
mod board;
mod colors;
mod game_over;
mod leaderboard;

pub use app::SnakeApp;
