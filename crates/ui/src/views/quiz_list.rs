use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, use_progress};
use crate::routes::Route;
use crate::vm::{QuizCardVm, map_quiz_cards};

#[component]
pub fn TestsView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_progress().get();
    let cards = map_quiz_cards(ctx.catalog().quizzes(), &progress);

    rsx! {
        div { class: "page tests",
            h1 { "ЦЕНТР " span { class: "gradient", "ЗНАНИЙ" } }
            p { class: "lead",
                "Проверьте свои навыки и получите XP для разблокировки новых модулей системы."
            }
            div { class: "card-grid",
                for card in cards {
                    QuizCard { card }
                }
            }
        }
    }
}

#[component]
fn QuizCard(card: QuizCardVm) -> Element {
    rsx! {
        div { class: "card quiz-card",
            div { class: "card-meta", "{card.subject}" }
            h3 { "{card.title}" }
            p { "{card.description}" }
            p { class: "quiz-meta",
                "Вопросов: {card.question_count}"
                if card.completions > 0 {
                    " · Пройден: {card.completions}"
                }
            }
            Link {
                class: "button",
                to: Route::QuizPlayer { quiz_id: card.id.clone() },
                "Запустить тест"
            }
        }
    }
}
