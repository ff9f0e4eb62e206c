mod error;
mod proto_convert;
mod ranking;
mod reporter;
mod service;
mod store;
mod types;

pub use error::{LeaderboardError, ReportError};
pub use ranking::{rank_entries, truncate_name};
pub use reporter::{LocalScoreReporter, ScoreReporter};
pub use service::Leaderboard;
pub use store::{ConfigScoreStore, InMemoryScoreStore, ScoreStore, ScoreTable, YamlFileScoreStore};
pub use types::{LeaderboardEntry, ScoreRecord, ScoreSubmission};
