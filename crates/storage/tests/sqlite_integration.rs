use quantum_core::model::{Progress, QuizId};
use storage::repository::{KeyValueStore, PROGRESS_KEY, ProgressRecord, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_kv_roundtrip_replaces_value() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get(PROGRESS_KEY).await.unwrap(), None);

    repo.put(PROGRESS_KEY, "first").await.unwrap();
    repo.put(PROGRESS_KEY, "second").await.unwrap();
    assert_eq!(
        repo.get(PROGRESS_KEY).await.unwrap().as_deref(),
        Some("second")
    );

    repo.remove(PROGRESS_KEY).await.unwrap();
    assert_eq!(repo.get(PROGRESS_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_migrate_is_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate_twice?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    repo.put("other", "value").await.unwrap();
    assert_eq!(repo.get("other").await.unwrap().as_deref(), Some("value"));
}

#[tokio::test]
async fn sqlite_storage_persists_progress_snapshot() {
    let storage = Storage::sqlite("sqlite:file:memdb_progress?mode=memory&cache=shared")
        .await
        .expect("storage");

    let mut progress = Progress::default();
    progress.record_completion(2, QuizId::new("physics-mech"));
    progress.record_completion(1, QuizId::new("physics-mech"));
    let json = ProgressRecord::from_progress(&progress).to_json().unwrap();
    storage.kv.put(PROGRESS_KEY, &json).await.unwrap();

    let raw = storage.kv.get(PROGRESS_KEY).await.unwrap().expect("stored");
    let loaded = ProgressRecord::from_json(&raw).unwrap().into_progress();
    assert_eq!(loaded, progress);
    assert_eq!(loaded.xp(), 150);
    assert_eq!(loaded.completed_quizzes().len(), 2);
}
