use dioxus::prelude::*;
use dioxus_router::Link;

use quantum_core::model::{Course, CourseId};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let courses = ctx.catalog().courses().to_vec();

    rsx! {
        div { class: "page courses",
            h1 { "БИБЛИОТЕКА " span { class: "gradient", "ЗНАНИЙ" } }
            p { class: "lead",
                "Наши программы разработаны ведущими экспертами и адаптированы под современный темп обучения."
            }
            div { class: "card-grid",
                for course in courses {
                    CourseCard { course }
                }
            }
        }
    }
}

#[component]
fn CourseCard(course: Course) -> Element {
    let code = course.id.as_str().to_uppercase();
    rsx! {
        div { class: "card course-card {course.color}",
            h3 { "{course.title}" }
            div { class: "card-meta", "Course Module ID: {code}" }
            p { "{course.description}" }
            Link {
                class: "button",
                to: Route::CourseDetail { course_id: course.id.as_str().to_owned() },
                "Подробнее"
            }
        }
    }
}

#[component]
pub fn CourseDetailView(course_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.catalog().course(&CourseId::new(course_id)).cloned();

    let Some(course) = course else {
        return rsx! {
            div { class: "page",
                p { "Курс не найден." }
                Link { to: Route::Courses {}, "К списку курсов" }
            }
        };
    };

    rsx! {
        div { class: "page course-detail",
            h1 { "{course.title}" }
            p { class: "lead", "{course.description}" }
            if !course.syllabus.is_empty() {
                h4 { "Программа курса" }
                ol { class: "syllabus",
                    for item in course.syllabus.iter() {
                        li { "{item}" }
                    }
                }
            }
            if let Some(outcomes) = course.outcomes.as_ref() {
                h4 { "Результаты обучения" }
                p { "{outcomes}" }
            }
            Link { class: "button", to: Route::Courses {}, "К списку курсов" }
        }
    }
}
