use super::types::{LeaderboardEntry, ScoreRecord};

/// Highest score first; equal scores keep the earliest submission first.
pub fn rank_entries(records: &[ScoreRecord], limit: usize) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<&ScoreRecord> = records.iter().collect();
    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    ranked.into_iter().take(limit).map(LeaderboardEntry::from).collect()
}

/// Counts characters, not bytes.
pub fn truncate_name(name: &str, max_len: usize) -> String {
    name.chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
    }

    fn record(name: &str, score: u32, seconds: i64) -> ScoreRecord {
        ScoreRecord {
            player_name: name.to_string(),
            score,
            game_duration: 0.0,
            created_at: at(seconds),
        }
    }

    #[test]
    fn test_orders_by_score_then_earliest() {
        let records = vec![
            record("late", 50, 30),
            record("low", 10, 0),
            record("early", 50, 10),
            record("best", 90, 20),
        ];

        let names: Vec<String> = rank_entries(&records, 10)
            .into_iter()
            .map(|e| e.player_name)
            .collect();
        assert_eq!(names, vec!["best", "early", "late", "low"]);
    }

    #[test]
    fn test_limit_keeps_top_entries() {
        let records: Vec<ScoreRecord> = (0..15).map(|i| record(&format!("p{}", i), i * 10, i as i64)).collect();

        let ranked = rank_entries(&records, 10);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].score, 140);
        assert_eq!(ranked[9].score, 50);
    }

    #[test]
    fn test_empty_records() {
        assert!(rank_entries(&[], 10).is_empty());
    }

    #[test]
    fn test_truncate_name_counts_chars() {
        assert_eq!(truncate_name("abcdefghijklmnopqrstuvwxyz", 20), "abcdefghijklmnopqrst");
        assert_eq!(truncate_name("short", 20), "short");
        assert_eq!(truncate_name("ääääää", 3), "äää");
    }
}
