use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Как dev-CLI решает, какие карты сбросить перед добором.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscardStrategy {
    /// Оставить карты из групп одинаковых рангов (или всю руку, если она
    /// уже собрана: стрит, флеш и старше), остальное сбросить.
    #[default]
    KeepMadeHands,
    /// Ничего не менять.
    StandPat,
}

/// Настройки dev-CLI, который разыгрывает раунды хедз-ап.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DevConfig {
    /// Сколько раундов сыграть.
    pub rounds: u32,
    /// Seed для детерминированной колоды; `None` = системный RNG.
    pub seed: Option<u64>,
    /// Если в колоде меньше карт, раунд начинается с новой колоды.
    pub min_cards_for_round: usize,
    pub discard_strategy: DiscardStrategy,
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            seed: None,
            min_cards_for_round: 10,
            discard_strategy: DiscardStrategy::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать конфиг {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("некорректный JSON конфига: {0}")]
    Json(#[from] serde_json::Error),
}

impl DevConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}
