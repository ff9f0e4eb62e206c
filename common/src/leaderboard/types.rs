use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a finished game reports. `game_duration` is in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub player_name: String,
    pub score: u32,
    #[serde(default)]
    pub game_duration: f64,
}

impl ScoreSubmission {
    pub fn new(player_name: impl Into<String>, score: u32, game_duration: f64) -> Self {
        Self {
            player_name: player_name.into(),
            score,
            game_duration,
        }
    }
}

/// A stored row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player_name: String,
    pub score: u32,
    pub game_duration: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub score: u32,
    pub created_at: DateTime<Utc>,
}

impl From<&ScoreRecord> for LeaderboardEntry {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            player_name: record.player_name.clone(),
            score: record.score,
            created_at: record.created_at,
        }
    }
}
