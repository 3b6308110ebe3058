use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{AppContext, use_progress};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizStep, QuizVm, start_quiz};

#[component]
pub fn QuizPlayerView(quiz_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quizzes = ctx.quizzes();
    let progress = use_progress();

    let vm = use_signal(|| None::<QuizVm>);
    let error = use_signal(|| None::<ViewError>);
    let busy = use_signal(|| false);

    let resource = use_resource(use_reactive!(|quiz_id| {
        let quizzes = quizzes.clone();
        let mut vm = vm;
        let mut error = error;
        async move {
            error.set(None);
            vm.set(None);
            let started = start_quiz(&quizzes, &quiz_id)?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    }));
    let state = view_state_from_resource(&resource);

    let on_answer = use_callback(move |option: usize| {
        let mut vm = vm;
        let mut error = error;
        let mut busy = busy;
        let mut progress = progress;
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let taken = vm.write().take();
            let Some(mut vm_value) = taken else {
                error.set(Some(ViewError::Unknown));
                busy.set(false);
                return;
            };

            let result = vm_value.answer(option).await;

            // Put the attempt back even on failure so the screen stays usable.
            vm.set(Some(vm_value));
            busy.set(false);

            match result {
                Ok(QuizStep::Continue) => error.set(None),
                Ok(QuizStep::Completed(updated)) => {
                    error.set(None);
                    progress.set(updated);
                }
                Err(err) => error.set(Some(err)),
            }
        });
    });

    let on_retry_save = use_callback(move |()| {
        let mut vm = vm;
        let mut error = error;
        let mut busy = busy;
        let mut progress = progress;
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let taken = vm.write().take();
            let Some(mut vm_value) = taken else {
                error.set(Some(ViewError::Unknown));
                busy.set(false);
                return;
            };

            let result = vm_value.retry_save().await;
            vm.set(Some(vm_value));
            busy.set(false);

            match result {
                Ok(Some(updated)) => {
                    error.set(None);
                    progress.set(updated);
                }
                Ok(None) => error.set(None),
                Err(err) => error.set(Some(err)),
            }
        });
    });

    let on_restart = use_callback(move |()| {
        let mut vm = vm;
        let mut error = error;
        if let Some(vm) = vm.write().as_mut() {
            vm.restart();
        }
        error.set(None);
    });

    let on_close = use_callback(move |()| {
        navigator.push(Route::Tests {});
    });

    let vm_guard = vm.read();
    let body = match (state, vm_guard.as_ref()) {
        (ViewState::Error(err), _) => rsx! {
            div { class: "quiz-error",
                p { "{err.message()}" }
                button { class: "button", onclick: move |_| on_close.call(()), "К списку тестов" }
            }
        },
        (_, Some(current)) => match current.result() {
            Some(result) => rsx! {
                div { class: "quiz-result",
                    h2 { "ТЕСТ ЗАВЕРШЕН" }
                    p { class: "quiz-title", "{current.subject()} · {current.title()}" }
                    div { class: "result-grid",
                        div { class: "result-card",
                            div { class: "value", "{result.percentage}%" }
                            div { class: "label", "Точность данных" }
                        }
                        div { class: "result-card",
                            div { class: "value", "+{result.xp_gained}" }
                            div { class: "label", "Получено XP" }
                        }
                    }
                    p { class: "result-score", "Верных ответов: {result.score} из {result.total}" }
                    div { class: "result-actions",
                        if current.needs_save() {
                            button {
                                class: "button primary",
                                disabled: busy(),
                                onclick: move |_| on_retry_save.call(()),
                                "Сохранить прогресс"
                            }
                        }
                        button { class: "button", onclick: move |_| on_restart.call(()), "Перезапуск" }
                        button { class: "button primary", onclick: move |_| on_close.call(()), "К списку тестов" }
                    }
                }
            },
            None => {
                let step_label = current.step_label();
                let percent = current.progress_percent();
                let question = current.question_text().unwrap_or_default().to_owned();
                let options = current.options();
                rsx! {
                    div { class: "quiz-question",
                        div { class: "quiz-progress",
                            div { class: "fill", style: "width: {percent}%" }
                        }
                        div { class: "quiz-header",
                            div {
                                span { class: "label", "{current.subject()}" }
                                span { class: "label", "Шаг Протокола" }
                                span { class: "step", "{step_label}" }
                            }
                            button { class: "close", onclick: move |_| on_close.call(()), "✕" }
                        }
                        div { class: "label", "Вопрос системы:" }
                        h3 { "{question}" }
                        div { class: "quiz-options",
                            for option in options {
                                button {
                                    class: "quiz-option",
                                    disabled: busy(),
                                    onclick: move |_| on_answer.call(option.index),
                                    span { class: "letter", "{option.letter}" }
                                    span { class: "text", "{option.text}" }
                                }
                            }
                        }
                    }
                }
            }
        },
        (_, None) => rsx! {
            p { "Загрузка..." }
        },
    };
    let error_message = error().map(ViewError::message);

    rsx! {
        div { class: "page quiz-player",
            {body}
            if let Some(message) = error_message {
                p { class: "error", "{message}" }
            }
        }
    }
}
