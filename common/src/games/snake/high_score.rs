use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{
    ConfigContentProvider, ConfigManager, FileContentConfigProvider, InMemoryConfigProvider,
    Validate, YamlConfigSerializer,
};
use crate::log;

/// Local best score. A missing or unreadable record reads as 0.
pub trait HighScoreStore: Send + Sync + 'static {
    fn load(&self) -> u32;
    fn save(&self, score: u32) -> Result<(), String>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
}

impl Validate for HighScoreRecord {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

pub struct ConfigHighScoreStore<P: ConfigContentProvider> {
    manager: ConfigManager<P, HighScoreRecord, YamlConfigSerializer>,
}

impl<P: ConfigContentProvider> ConfigHighScoreStore<P> {
    pub fn new(provider: P) -> Self {
        Self {
            manager: ConfigManager::new(provider, YamlConfigSerializer::new()),
        }
    }
}

impl ConfigHighScoreStore<FileContentConfigProvider> {
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(path))
    }
}

impl ConfigHighScoreStore<InMemoryConfigProvider> {
    pub fn in_memory() -> Self {
        Self::new(InMemoryConfigProvider::new())
    }
}

impl<P> HighScoreStore for ConfigHighScoreStore<P>
where
    P: ConfigContentProvider + Send + Sync + 'static,
{
    fn load(&self) -> u32 {
        match self.manager.get_config() {
            Ok(record) => record.high_score,
            Err(e) => {
                log!("Ignoring unreadable high score: {}", e);
                0
            }
        }
    }

    fn save(&self, score: u32) -> Result<(), String> {
        self.manager.set_config(&HighScoreRecord { high_score: score })
    }
}

/// Best score seen so far, plus the best as it stood when the current round began.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighScoreTracker {
    best: u32,
    round_baseline: u32,
}

impl HighScoreTracker {
    pub fn new(stored: u32) -> Self {
        Self {
            best: stored,
            round_baseline: stored,
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Returns true when `score` raised the best.
    pub fn observe(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            return true;
        }
        false
    }

    pub fn begin_round(&mut self) {
        self.round_baseline = self.best;
    }

    pub fn is_round_record(&self, score: u32) -> bool {
        score > self.round_baseline
    }
}
