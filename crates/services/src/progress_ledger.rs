use std::sync::Arc;

use quantum_core::model::{Progress, QuizId};
use storage::repository::{KeyValueStore, PROGRESS_KEY, ProgressRecord};
use tokio::sync::Mutex;

use crate::error::ProgressError;

/// Durable experience/level/rank record, shared by every view that shows it.
///
/// Loaded once at startup; each mutation persists the whole snapshot before
/// the new state becomes visible.
pub struct ProgressLedger {
    kv: Arc<dyn KeyValueStore>,
    progress: Mutex<Progress>,
}

impl ProgressLedger {
    /// Load the persisted snapshot, falling back to defaults when it is absent
    /// or cannot be parsed.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the store itself cannot be read.
    pub async fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self, ProgressError> {
        let progress = match kv.get(PROGRESS_KEY).await? {
            None => {
                tracing::debug!("no stored progress, starting fresh");
                Progress::default()
            }
            Some(raw) => match ProgressRecord::from_json(&raw) {
                Ok(record) => record.into_progress(),
                Err(err) => {
                    tracing::warn!("discarding unreadable progress snapshot: {err}");
                    Progress::default()
                }
            },
        };

        tracing::info!(
            xp = progress.xp(),
            level = progress.level(),
            rank = %progress.rank(),
            "progress loaded"
        );

        Ok(Self {
            kv,
            progress: Mutex::new(progress),
        })
    }

    /// Current progress.
    pub async fn snapshot(&self) -> Progress {
        self.progress.lock().await.clone()
    }

    /// Credit a finished attempt and persist the new snapshot.
    ///
    /// The same quiz may be recorded any number of times; each completion
    /// grants experience again.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the snapshot cannot be written; the
    /// in-memory progress is left unchanged in that case.
    pub async fn record_completion(
        &self,
        score: u32,
        quiz_id: QuizId,
    ) -> Result<Progress, ProgressError> {
        let mut guard = self.progress.lock().await;
        let mut next = guard.clone();
        let gained = next.record_completion(score, quiz_id.clone());
        self.persist(&next).await?;
        *guard = next.clone();

        tracing::info!(
            quiz = %quiz_id,
            score,
            gained,
            xp = next.xp(),
            level = next.level(),
            rank = %next.rank(),
            "quiz completion recorded"
        );
        Ok(next)
    }

    /// Wipe progress back to a first-launch state.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the snapshot cannot be written.
    pub async fn reset(&self) -> Result<Progress, ProgressError> {
        let mut guard = self.progress.lock().await;
        let fresh = Progress::default();
        self.persist(&fresh).await?;
        *guard = fresh.clone();
        tracing::info!("progress reset");
        Ok(fresh)
    }

    async fn persist(&self, progress: &Progress) -> Result<(), ProgressError> {
        let json = ProgressRecord::from_progress(progress).to_json()?;
        self.kv.put(PROGRESS_KEY, &json).await?;
        Ok(())
    }
}
