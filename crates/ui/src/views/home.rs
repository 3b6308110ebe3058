use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, use_progress};
use crate::routes::{LevelBadge, Route};
use crate::vm::map_progress;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = map_progress(&use_progress().get());
    let catalog = ctx.catalog();
    let course_count = catalog.courses().len();
    let quiz_count = catalog.quizzes().len();

    rsx! {
        div { class: "page home",
            section { class: "hero",
                div { class: "hero-tag", "Протокол обучения активирован" }
                h1 { "РАЗУМ " span { class: "gradient", "БЕЗ ГРАНИЦ." } }
                p {
                    "Мы объединили академическую базу и технологии будущего. "
                    "Проходите тесты, готовьтесь к олимпиадам и станьте частью интеллектуальной элиты."
                }
                div { class: "hero-actions",
                    Link { class: "button primary", to: Route::Tests {}, "Начать путь" }
                    div { class: "xp-card",
                        span { class: "label", "Текущий XP" }
                        span { class: "value", "{progress.xp}" }
                    }
                }
            }

            section { class: "progress-panel",
                LevelBadge {}
                div { class: "level-progress",
                    div { class: "bar",
                        div { class: "fill", style: "width: {progress.level_percent}%" }
                    }
                    p { "До следующего уровня: {progress.xp_to_next} XP" }
                    p { "Пройдено тестов: {progress.completed}" }
                }
            }

            section { class: "fact",
                div { class: "label", "Научный факт дня" }
                p { "Квантовая запутанность позволяет частицам оставаться связанными на любых расстояниях." }
            }

            section { class: "stats",
                div { span { class: "value", "{course_count}" } span { class: "label", "Курсов" } }
                div { span { class: "value", "{quiz_count}" } span { class: "label", "Тестов" } }
            }
        }
    }
}
