use dioxus::prelude::*;

/// Value cards on the about page: title and text.
const VALUES: [(&str, &str); 3] = [
    (
        "Доступность",
        "Мы верим, что качественное научное образование должно быть доступно каждому, независимо от географии.",
    ),
    (
        "Инновации",
        "Наши ИИ-алгоритмы персонализируют обучение, находя пробелы в знаниях за миллисекунды.",
    ),
    (
        "Результат",
        "98% наших студентов показывают рост результатов на олимпиадах уже через 2 месяца обучения.",
    ),
];

const STACK: [&str; 5] = ["Google GenAI", "Three.js", "React 19", "Tailwind", "Edge Computing"];

pub const SUPPORT_EMAIL: &str = "info@quantum-ec.ru";

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "page about",
            h1 { "ЭВОЛЮЦИЯ " span { class: "gradient", "ЗНАНИЙ." } }
            p { class: "lead",
                "Мы не просто школа. Мы — исследовательский центр, который дает инструменты для покорения будущего. Quantum EC был основан в 2024 году группой ученых из MIT и МГУ."
            }
            div { class: "card-grid",
                for (title, text) in VALUES {
                    div { class: "card",
                        h3 { "{title}" }
                        p { "{text}" }
                    }
                }
            }
            section { class: "card stack",
                h2 { "Наш Технологический Стек" }
                p { class: "lead",
                    "Мы используем самые современные технологии для обеспечения стабильности и интеллекта нашей платформы."
                }
                div { class: "tags",
                    for tech in STACK {
                        span { class: "hero-tag", "{tech}" }
                    }
                }
                div { class: "stats",
                    div {
                        span { class: "value", "10ms" }
                        span { class: "label", "Response Latency" }
                    }
                    div {
                        span { class: "value", "99.9%" }
                        span { class: "label", "Uptime Protocol" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContactView() -> Element {
    rsx! {
        div { class: "page contact",
            h1 { "ЕСТЬ " span { class: "gradient", "ВОПРОСЫ?" } }
            p { class: "lead",
                "Мы открыты к предложениям и готовы помочь в вашем обучении. Выберите удобный канал связи."
            }
            div { class: "card-grid",
                div { class: "card",
                    h3 { "Email Protocol" }
                    p { "{SUPPORT_EMAIL}" }
                }
                div { class: "card",
                    h3 { "Direct Support" }
                    p { "@quantum_hq_support" }
                }
            }
            div { class: "label", "Quantum Foundation Comms Unit" }
        }
    }
}

#[component]
pub fn DownloadView() -> Element {
    rsx! {
        div { class: "page download",
            h1 { "QUANTUM " span { class: "gradient", "MOBILE APP" } }
            p { class: "lead",
                "Получите полный доступ к курсам, оффлайн тестам и AI-ассистенту прямо на вашем смартфоне."
            }
            div { class: "hero-actions",
                div { class: "button store",
                    span { class: "label", "Download for" }
                    " App Store"
                }
                div { class: "button primary store",
                    span { class: "label", "Get it on" }
                    " Play Market"
                }
            }
        }
    }
}
