use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::use_progress_provider;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_progress_provider();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Quantum EC" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Что-то пошло не так" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
