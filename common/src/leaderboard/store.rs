use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigContentProvider, ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use super::error::LeaderboardError;
use super::types::ScoreRecord;

pub trait ScoreStore: Send + Sync + 'static {
    fn insert(&self, record: ScoreRecord) -> Result<(), LeaderboardError>;
    fn records(&self) -> Result<Vec<ScoreRecord>, LeaderboardError>;
}

#[derive(Default)]
pub struct InMemoryScoreStore {
    records: Mutex<Vec<ScoreRecord>>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn insert(&self, record: ScoreRecord) -> Result<(), LeaderboardError> {
        self.records
            .lock()
            .map_err(|_| LeaderboardError::Storage("score table poisoned".to_string()))?
            .push(record);
        Ok(())
    }

    fn records(&self) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        let records = self
            .records
            .lock()
            .map_err(|_| LeaderboardError::Storage("score table poisoned".to_string()))?;
        Ok(records.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    #[serde(default)]
    pub records: Vec<ScoreRecord>,
}

impl Validate for ScoreTable {
    fn validate(&self) -> Result<(), String> {
        if let Some(record) = self.records.iter().find(|r| r.player_name.is_empty()) {
            return Err(format!("record created at {} has an empty player name", record.created_at));
        }
        Ok(())
    }
}

/// Whole table serialized through the config layer on every insert.
pub struct ConfigScoreStore<P: ConfigContentProvider> {
    manager: ConfigManager<P, ScoreTable, YamlConfigSerializer>,
    write_lock: Mutex<()>,
}

pub type YamlFileScoreStore = ConfigScoreStore<FileContentConfigProvider>;

impl<P: ConfigContentProvider> ConfigScoreStore<P> {
    pub fn new(provider: P) -> Self {
        Self {
            manager: ConfigManager::new(provider, YamlConfigSerializer::new()),
            write_lock: Mutex::new(()),
        }
    }
}

impl ConfigScoreStore<FileContentConfigProvider> {
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(path))
    }
}

impl<P> ScoreStore for ConfigScoreStore<P>
where
    P: ConfigContentProvider + Send + Sync + 'static,
{
    fn insert(&self, record: ScoreRecord) -> Result<(), LeaderboardError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| LeaderboardError::Storage("score table poisoned".to_string()))?;
        self.manager
            .update(|table| table.records.push(record))
            .map(|_| ())
            .map_err(LeaderboardError::Storage)
    }

    fn records(&self) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        self.manager
            .get_config()
            .map(|table| table.records)
            .map_err(LeaderboardError::Storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;
    use chrono::{TimeZone, Utc};

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_scores_{}.yaml", random_number));
        path
    }

    fn record(name: &str, score: u32) -> ScoreRecord {
        ScoreRecord {
            player_name: name.to_string(),
            score,
            game_duration: 4.5,
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_in_memory_store_keeps_insert_order() {
        let store = InMemoryScoreStore::new();
        store.insert(record("a", 10)).unwrap();
        store.insert(record("b", 20)).unwrap();

        let names: Vec<String> = store.records().unwrap().into_iter().map(|r| r.player_name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_yaml_file_store_reopens_with_records() {
        let path = get_temp_file_path();
        {
            let store = YamlFileScoreStore::from_yaml_file(&path);
            assert!(store.records().unwrap().is_empty());
            store.insert(record("alice", 30)).unwrap();
            store.insert(record("bob", 40)).unwrap();
        }

        let reopened = YamlFileScoreStore::from_yaml_file(&path);
        let records = reopened.records().unwrap();
        assert_eq!(records, vec![record("alice", 30), record("bob", 40)]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_corrupt_table_is_a_storage_error() {
        let store = ConfigScoreStore::new(InMemoryConfigProvider::with_content("records: 12"));
        assert!(matches!(store.records(), Err(LeaderboardError::Storage(_))));
        assert!(matches!(store.insert(record("a", 1)), Err(LeaderboardError::Storage(_))));
    }
}
