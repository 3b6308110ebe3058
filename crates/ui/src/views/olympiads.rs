use dioxus::prelude::*;

use quantum_core::model::Olympiad;

use crate::context::AppContext;
use crate::vm::registration_label;

#[component]
pub fn OlympiadsView() -> Element {
    let ctx = use_context::<AppContext>();
    let olympiads = ctx.catalog().olympiads().to_vec();

    rsx! {
        div { class: "page olympiads",
            h1 { "АРЕНА " span { class: "accent", "ПОБЕД" } }
            p { class: "lead",
                "Твой билет в лучшие университеты мира. Участвуй, побеждай и забирай награды EC Foundation."
            }
            div { class: "card-grid",
                for olympiad in olympiads {
                    OlympiadCard { olympiad }
                }
            }
        }
    }
}

#[component]
fn OlympiadCard(olympiad: Olympiad) -> Element {
    let registration = registration_label(&olympiad);
    rsx! {
        div { class: "card olympiad-card",
            div { class: "card-meta",
                span { "Статус Регистрации" }
                span { class: "status", "{registration}" }
            }
            h3 { "{olympiad.title}" }
            p { "{olympiad.description}" }
            p { class: "details", "{olympiad.details}" }
            h4 { "Этапы турнира" }
            ol { class: "roadmap",
                for step in olympiad.roadmap.iter() {
                    li { "{step}" }
                }
            }
        }
    }
}
