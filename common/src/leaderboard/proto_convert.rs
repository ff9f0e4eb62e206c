use chrono::{DateTime, Utc};

use crate::proto;
use super::types::{LeaderboardEntry, ScoreSubmission};

impl From<ScoreSubmission> for proto::SubmitScoreRequest {
    fn from(submission: ScoreSubmission) -> Self {
        Self {
            player_name: submission.player_name,
            score: submission.score,
            game_duration: submission.game_duration,
        }
    }
}

impl From<proto::SubmitScoreRequest> for ScoreSubmission {
    fn from(request: proto::SubmitScoreRequest) -> Self {
        Self {
            player_name: request.player_name,
            score: request.score,
            game_duration: request.game_duration,
        }
    }
}

impl From<LeaderboardEntry> for proto::LeaderboardEntry {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            player_name: entry.player_name,
            score: entry.score,
            created_at_ms: entry.created_at.timestamp_millis(),
        }
    }
}

/// Out-of-range timestamps read as the unix epoch.
impl From<proto::LeaderboardEntry> for LeaderboardEntry {
    fn from(entry: proto::LeaderboardEntry) -> Self {
        Self {
            player_name: entry.player_name,
            score: entry.score,
            created_at: DateTime::<Utc>::from_timestamp_millis(entry.created_at_ms)
                .unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_entry_keeps_millisecond_timestamp() {
        let created_at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let entry = LeaderboardEntry {
            player_name: "alice".to_string(),
            score: 40,
            created_at,
        };

        let wire: proto::LeaderboardEntry = entry.clone().into();
        assert_eq!(wire.created_at_ms, 1_700_000_000_123);
        assert_eq!(LeaderboardEntry::from(wire), entry);
    }

    #[test]
    fn test_out_of_range_timestamp_reads_as_epoch() {
        let wire = proto::LeaderboardEntry {
            player_name: "x".to_string(),
            score: 1,
            created_at_ms: i64::MAX,
        };
        assert_eq!(LeaderboardEntry::from(wire).created_at, DateTime::<Utc>::UNIX_EPOCH);
    }
}
