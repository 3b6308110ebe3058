use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::use_progress;
use crate::views::{
    AboutView, ChatWidget, ContactView, CourseDetailView, CoursesView, DownloadView, HomeView,
    OlympiadsView, QuizPlayerView, SUPPORT_EMAIL, TeachersView, TestsView,
};
use crate::vm::map_progress;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/courses", CoursesView)] Courses {},
        #[route("/courses/:course_id", CourseDetailView)] CourseDetail { course_id: String },
        #[route("/tests", TestsView)] Tests {},
        #[route("/tests/:quiz_id", QuizPlayerView)] QuizPlayer { quiz_id: String },
        #[route("/olympiads", OlympiadsView)] Olympiads {},
        #[route("/teachers", TeachersView)] Teachers {},
        #[route("/about", AboutView)] About {},
        #[route("/contact", ContactView)] Contact {},
        #[route("/download", DownloadView)] Download {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer {}
            ChatWidget {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            Link { class: "brand", to: Route::Home {}, "QUANTUM EC" }
            ul {
                li { Link { to: Route::Home {}, "Главная" } }
                li { Link { to: Route::Courses {}, "Курсы" } }
                li { Link { to: Route::Tests {}, "Тесты" } }
                li { Link { to: Route::Olympiads {}, "Олимпиады" } }
                li { Link { to: Route::Teachers {}, "Наставники" } }
            }
            LevelBadge {}
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-columns",
                div {
                    Link { class: "brand", to: Route::Home {}, "QUANTUM EC" }
                    p { class: "lead",
                        "Мы строим мост в будущее, где каждый разум может раскрыть свой потенциал через науку и технологии."
                    }
                }
                div {
                    h4 { class: "label", "Навигация" }
                    ul {
                        li { Link { to: Route::Courses {}, "Библиотека Курсов" } }
                        li { Link { to: Route::Tests {}, "Центр Тестов" } }
                        li { Link { to: Route::Olympiads {}, "Олимпиадный План" } }
                        li { Link { to: Route::Teachers {}, "Состав Экспертов" } }
                    }
                }
                div {
                    h4 { class: "label", "О нас" }
                    ul {
                        li { Link { to: Route::About {}, "О Quantum EC" } }
                        li { Link { to: Route::Contact {}, "Контакты" } }
                        li { Link { to: Route::Download {}, "Приложение" } }
                        li { "{SUPPORT_EMAIL}" }
                    }
                }
            }
            div { class: "footer-legal",
                "© 2024 QUANTUM EC FOUNDATION. ALL SYSTEMS NOMINAL. HUMANITY UPGRADED."
            }
        }
    }
}

#[component]
pub fn LevelBadge() -> Element {
    let progress = map_progress(&use_progress().get());

    rsx! {
        div { class: "level-badge",
            div { class: "level-badge-level", "{progress.level}" }
            div { class: "level-badge-rank",
                span { class: "label", "Ранг" }
                span { class: "value", "{progress.rank}" }
            }
        }
    }
}
