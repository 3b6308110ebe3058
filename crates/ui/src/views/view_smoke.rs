use quantum_core::model::{Progress, QuizId};
use storage::repository::{PROGRESS_KEY, ProgressRecord, Storage};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

async fn storage_with_progress(progress: &Progress) -> Storage {
    let storage = Storage::in_memory();
    let json = ProgressRecord::from_progress(progress).to_json().unwrap();
    storage.kv.put(PROGRESS_KEY, &json).await.unwrap();
    storage
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_stored_xp() {
    let mut progress = Progress::default();
    for _ in 0..11 {
        progress.record_completion(2, QuizId::new("math-base"));
    }
    let storage = storage_with_progress(&progress).await;
    let mut harness = setup_view_harness_with_storage(ViewKind::Home, storage).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Текущий XP"), "missing xp label in {html}");
    assert!(html.contains("1100"), "missing xp value in {html}");
    assert!(html.contains("Наблюдатель"), "missing rank in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_lists_catalog() {
    let mut harness = setup_view_harness(ViewKind::Courses).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Математика"), "missing course in {html}");
    assert!(html.contains("Course Module ID: MATH"), "missing module id in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_renders_syllabus() {
    let mut harness = setup_view_harness(ViewKind::CourseDetail("math".into())).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Линейная алгебра"), "missing syllabus in {html}");

    let mut missing = setup_view_harness(ViewKind::CourseDetail("alchemy".into())).await;
    missing.rebuild();
    let html = missing.render();
    assert!(html.contains("Курс не найден."), "missing fallback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn olympiads_and_teachers_smoke_render() {
    let mut harness = setup_view_harness(ViewKind::Olympiads).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Quantum Math Challenge"), "missing olympiad in {html}");
    assert!(html.contains("Открыта до 15 Сентября"), "missing status in {html}");

    let mut harness = setup_view_harness(ViewKind::Teachers).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Александр Петров"), "missing teacher in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn info_pages_smoke_render() {
    let cases = [
        (ViewKind::About, "Наш Технологический Стек"),
        (ViewKind::Contact, "info@quantum-ec.ru"),
        (ViewKind::Download, "Play Market"),
    ];
    for (view, expected) in cases {
        let mut harness = setup_view_harness(view).await;
        harness.rebuild();
        let html = harness.render();
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn tests_view_smoke_counts_completions() {
    let mut progress = Progress::default();
    progress.record_completion(1, QuizId::new("physics-mech"));
    let storage = storage_with_progress(&progress).await;
    let mut harness = setup_view_harness_with_storage(ViewKind::Tests, storage).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Классическая Механика"), "missing quiz in {html}");
    assert!(html.contains("Пройден: 1"), "missing completion count in {html}");
    assert!(html.contains("Запустить тест"), "missing start link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_player_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz("physics-mech".into())).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("1 / 2"), "missing step in {html}");
    assert!(html.contains("Второй закон Ньютона гласит:"), "missing question in {html}");
    assert!(html.contains("F = ma"), "missing option in {html}");
    assert!(html.contains("Физика"), "missing subject in {html}");
    assert_eq!(harness.services.ledger().snapshot().await, Progress::default());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_player_smoke_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Quiz("astronomy".into())).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Тест не найден."), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_player_follows_changed_quiz_id() {
    let view = ViewKind::QuizSwitch("physics-mech".into(), "ai-intro".into());
    let mut harness = setup_view_harness(view).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Что такое обучение с учителем?"), "missing new question in {html}");
    assert!(!html.contains("Второй закон Ньютона"), "stale quiz in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn chat_widget_smoke_renders_greeting() {
    let mut harness = setup_view_harness(ViewKind::Chat).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Quantum Core"), "missing greeting in {html}");
    assert!(html.contains("Status: Operational"), "missing status in {html}");
    assert!(!html.contains("Анализ запроса..."), "unexpected loading in {html}");
    assert!(harness.storage.kv.get(PROGRESS_KEY).await.unwrap().is_none());
}
