use dioxus::prelude::*;

use quantum_core::model::Teacher;

use crate::context::AppContext;

#[component]
pub fn TeachersView() -> Element {
    let ctx = use_context::<AppContext>();
    let teachers = ctx.catalog().teachers().to_vec();

    rsx! {
        div { class: "page teachers",
            h1 { "НАШИ " span { class: "gradient", "ЭКСПЕРТЫ" } }
            p { class: "lead",
                "В Quantum EC преподают только те, кто сам прошел путь от олимпиадника до ведущего ученого."
            }
            div { class: "card-grid",
                for teacher in teachers {
                    TeacherCard { teacher }
                }
            }
        }
    }
}

#[component]
fn TeacherCard(teacher: Teacher) -> Element {
    rsx! {
        div { class: "card teacher-card",
            img { src: "{teacher.image}", alt: "{teacher.name}" }
            h3 { "{teacher.name}" }
            div { class: "card-meta", "{teacher.subject}" }
            p { "{teacher.bio}" }
            if let Some(quote) = teacher.quote.as_ref() {
                blockquote { "«{quote}»" }
            }
        }
    }
}
