use async_trait::async_trait;
use quantum_core::model::{Progress, QuizId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Key under which the progress snapshot is stored.
pub const PROGRESS_KEY: &str = "quantum_progress";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of the progress snapshot.
///
/// Field names match the stored JSON (`xp`, `level`, `completedQuizzes`,
/// `rank`). Every field defaults when absent so older snapshots still load.
/// `level` and `rank` are written for readers of the raw value but are not
/// trusted on read: both are derived from `xp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressRecord {
    pub xp: i64,
    pub level: i64,
    pub completed_quizzes: Vec<String>,
    pub rank: String,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self::from_progress(&Progress::default())
    }
}

impl ProgressRecord {
    #[must_use]
    pub fn from_progress(progress: &Progress) -> Self {
        Self {
            xp: i64::try_from(progress.xp()).unwrap_or(i64::MAX),
            level: i64::from(progress.level()),
            completed_quizzes: progress
                .completed_quizzes()
                .iter()
                .map(|id| id.as_str().to_owned())
                .collect(),
            rank: progress.rank().label().to_owned(),
        }
    }

    /// Convert the record back into domain `Progress`.
    ///
    /// Negative experience is clamped to zero; level and rank are recomputed.
    #[must_use]
    pub fn into_progress(self) -> Progress {
        let xp = u64::try_from(self.xp).unwrap_or(0);
        let completed = self.completed_quizzes.into_iter().map(QuizId::new).collect();
        Progress::from_persisted(xp, completed)
    }

    /// Parse a stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the value is not a snapshot object.
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))
    }

    /// Encode the snapshot for storage.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|err| StorageError::Serialization(err.to_string()))
    }
}

/// Durable string key-value storage. Writes replace the previous value whole.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store for tests and ephemeral runs.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Storage backends behind trait objects for easy swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let kv: Arc<dyn KeyValueStore> = Arc::new(InMemoryRepository::new());
        Self { kv }
    }
}
