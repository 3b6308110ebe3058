use std::sync::Arc;

use quantum_core::Catalog;
use quantum_core::model::{Attempt, AttemptOutcome, AttemptResult, Progress, QuizError, QuizId};

use crate::error::QuizRunnerError;
use crate::progress_ledger::ProgressLedger;

/// Result of answering one question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizAnswerResult {
    pub outcome: AttemptOutcome,
    /// Updated progress when the answer finished the attempt.
    pub progress: Option<Progress>,
}

/// Starts attempts against the catalog's quizzes.
#[derive(Clone)]
pub struct QuizService {
    catalog: Arc<Catalog>,
    ledger: Arc<ProgressLedger>,
}

impl QuizService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, ledger: Arc<ProgressLedger>) -> Self {
        Self { catalog, ledger }
    }

    /// Begin a fresh attempt at `quiz_id`.
    ///
    /// # Errors
    ///
    /// Returns `QuizRunnerError::Quiz` if the catalog has no such quiz.
    pub fn start(&self, quiz_id: &QuizId) -> Result<QuizRunner, QuizRunnerError> {
        let quiz = self
            .catalog
            .quiz(quiz_id)
            .cloned()
            .ok_or_else(|| QuizError::UnknownQuiz(quiz_id.clone()))?;
        tracing::debug!(quiz = %quiz_id, questions = quiz.question_count(), "quiz started");
        Ok(QuizRunner {
            attempt: Attempt::new(quiz),
            ledger: Arc::clone(&self.ledger),
            unrecorded: None,
        })
    }
}

/// Drives one attempt and credits the ledger when it completes.
pub struct QuizRunner {
    attempt: Attempt,
    ledger: Arc<ProgressLedger>,
    /// Completed result the ledger has not accepted yet.
    unrecorded: Option<AttemptResult>,
}

impl QuizRunner {
    #[must_use]
    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    /// True while a completed result is waiting to be written to the ledger.
    #[must_use]
    pub fn has_unrecorded_completion(&self) -> bool {
        self.unrecorded.is_some()
    }

    /// Record `option` for the current question.
    ///
    /// The ledger is credited exactly once per attempt, on the answer that
    /// completes it.
    ///
    /// # Errors
    ///
    /// Returns `QuizRunnerError::Attempt` for an invalid option or a finished
    /// attempt, and `QuizRunnerError::Progress` if the completion cannot be
    /// persisted. In that case the result is kept and `retry_record` can
    /// credit it later.
    pub async fn answer(&mut self, option: usize) -> Result<QuizAnswerResult, QuizRunnerError> {
        let outcome = self.attempt.submit_answer(option)?;
        let progress = match &outcome {
            AttemptOutcome::Advanced { .. } => None,
            AttemptOutcome::Completed(result) => {
                self.unrecorded = Some(*result);
                self.retry_record().await?
            }
        };
        Ok(QuizAnswerResult { outcome, progress })
    }

    /// Credit the pending completion to the ledger.
    ///
    /// Returns `None` when nothing is waiting, so a result is never credited
    /// twice.
    ///
    /// # Errors
    ///
    /// Returns `QuizRunnerError::Progress` if the write fails again; the
    /// result stays pending.
    pub async fn retry_record(&mut self) -> Result<Option<Progress>, QuizRunnerError> {
        let Some(result) = self.unrecorded else {
            return Ok(None);
        };
        let quiz_id = self.attempt.quiz().id().clone();
        let progress = self.ledger.record_completion(result.score, quiz_id).await?;
        self.unrecorded = None;
        Ok(Some(progress))
    }

    /// Reset to the first question. Progress is not touched, and a result
    /// still waiting for the ledger is dropped.
    pub fn restart(&mut self) {
        if self.unrecorded.take().is_some() {
            tracing::warn!(quiz = %self.attempt.quiz().id(), "restart dropped an unrecorded completion");
        }
        self.attempt.restart();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use storage::repository::{InMemoryRepository, KeyValueStore, StorageError};

    use super::*;

    /// Rejects writes until `recover` is set.
    #[derive(Default)]
    struct DiskFullStore {
        inner: InMemoryRepository,
        recovered: AtomicBool,
    }

    impl DiskFullStore {
        fn recover(&self) {
            self.recovered.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl KeyValueStore for DiskFullStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key).await
        }

        async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if !self.recovered.load(Ordering::SeqCst) {
                return Err(StorageError::Connection("disk full".to_string()));
            }
            self.inner.put(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key).await
        }
    }

    async fn service() -> QuizService {
        let kv: Arc<dyn KeyValueStore> = Arc::new(InMemoryRepository::new());
        let ledger = Arc::new(ProgressLedger::load(kv).await.unwrap());
        let catalog = Arc::new(Catalog::builtin().unwrap());
        QuizService::new(catalog, ledger)
    }

    #[tokio::test]
    async fn unknown_quiz_is_rejected() {
        let service = service().await;
        let err = service.start(&QuizId::new("chemistry")).err().unwrap();
        assert!(matches!(
            err,
            QuizRunnerError::Quiz(QuizError::UnknownQuiz(_))
        ));
    }

    #[tokio::test]
    async fn only_completing_answer_reports_progress() {
        let service = service().await;
        let mut runner = service.start(&QuizId::new("physics-mech")).unwrap();

        let first = runner.answer(0).await.unwrap();
        assert_eq!(first.outcome, AttemptOutcome::Advanced { step: 1 });
        assert!(first.progress.is_none());

        let second = runner.answer(1).await.unwrap();
        let AttemptOutcome::Completed(result) = second.outcome else {
            panic!("expected completion");
        };
        assert_eq!(result.score, 1);
        assert_eq!(result.percentage, 50);
        assert_eq!(second.progress.unwrap().xp(), 50);
    }

    #[tokio::test]
    async fn answering_after_completion_fails() {
        let service = service().await;
        let mut runner = service.start(&QuizId::new("math-base")).unwrap();
        runner.answer(0).await.unwrap();
        runner.answer(0).await.unwrap();
        let err = runner.answer(0).await.unwrap_err();
        assert!(matches!(err, QuizRunnerError::Attempt(_)));
    }

    #[tokio::test]
    async fn failed_write_keeps_completion_for_retry() {
        let store = Arc::new(DiskFullStore::default());
        let kv: Arc<dyn KeyValueStore> = store.clone();
        let ledger = Arc::new(ProgressLedger::load(kv).await.unwrap());
        let service = QuizService::new(Arc::new(Catalog::builtin().unwrap()), Arc::clone(&ledger));
        let mut runner = service.start(&QuizId::new("math-base")).unwrap();

        runner.answer(0).await.unwrap();
        let err = runner.answer(0).await.unwrap_err();
        assert!(matches!(err, QuizRunnerError::Progress(_)));
        assert!(runner.has_unrecorded_completion());
        assert_eq!(ledger.snapshot().await.xp(), 0);

        assert!(runner.retry_record().await.is_err());
        assert!(runner.has_unrecorded_completion());

        store.recover();
        let progress = runner.retry_record().await.unwrap().unwrap();
        assert_eq!(progress.xp(), 100);
        assert!(!runner.has_unrecorded_completion());
        assert_eq!(ledger.snapshot().await.xp(), 100);

        assert_eq!(runner.retry_record().await.unwrap(), None);
        assert_eq!(ledger.snapshot().await.completed_quizzes().len(), 1);
    }

    #[tokio::test]
    async fn restart_drops_unrecorded_completion() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(DiskFullStore::default());
        let ledger = Arc::new(ProgressLedger::load(kv).await.unwrap());
        let service = QuizService::new(Arc::new(Catalog::builtin().unwrap()), Arc::clone(&ledger));
        let mut runner = service.start(&QuizId::new("math-base")).unwrap();

        runner.answer(0).await.unwrap();
        runner.answer(0).await.unwrap_err();
        runner.restart();
        assert!(!runner.has_unrecorded_completion());
        assert_eq!(runner.attempt().step(), Some(0));
        assert_eq!(runner.retry_record().await.unwrap(), None);
    }
}
