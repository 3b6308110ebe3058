use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{INPUT_PLACEHOLDER, LOADING_LABEL, map_chat_messages};

/// Floating assistant panel. Only the newest message is sent upstream.
#[component]
pub fn ChatWidget(#[props(default)] start_open: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let chat = ctx.chat();
    let assistant_enabled = ctx.assistant_enabled();

    let mut open = use_signal(|| start_open);
    let mut input = use_signal(String::new);
    let transcript = {
        let chat = chat.clone();
        use_signal(move || chat.new_transcript())
    };

    let send = use_callback(move |()| {
        let chat = chat.clone();
        let mut transcript = transcript;
        let mut input = input;
        let text = input.peek().clone();
        {
            let mut guard = transcript.write();
            if !chat.begin(&mut guard, &text) {
                return;
            }
        }
        input.set(String::new());
        spawn(async move {
            let reply = chat.reply_to(&text).await;
            chat.finish(&mut transcript.write(), reply);
        });
    });

    if !open() {
        return rsx! {
            div { class: "chat-widget",
                button { class: "chat-toggle", onclick: move |_| open.set(true), "Quantum Core" }
            }
        };
    }

    let messages = map_chat_messages(&transcript.read());
    let loading = transcript.read().is_loading();

    rsx! {
        div { class: "chat-widget",
            div { class: "chat-panel",
                div { class: "chat-header",
                    div {
                        span { class: "title", "Quantum AI" }
                        if assistant_enabled {
                            span { class: "status", "Status: Operational" }
                        } else {
                            span { class: "status offline", "Status: Offline" }
                        }
                    }
                    button { class: "close", onclick: move |_| open.set(false), "✕" }
                }
                div { class: "chat-messages",
                    for message in messages {
                        div { class: bubble_class(message.from_user),
                            p { "{message.text}" }
                            span { class: "time", "{message.time}" }
                        }
                    }
                    if loading {
                        div { class: "chat-loading", "{LOADING_LABEL}" }
                    }
                }
                div { class: "chat-input",
                    input {
                        value: "{input}",
                        placeholder: INPUT_PLACEHOLDER,
                        oninput: move |evt| input.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                send.call(());
                            }
                        },
                    }
                    button { class: "send", disabled: loading, onclick: move |_| send.call(()), "➤" }
                }
            }
        }
    }
}

fn bubble_class(from_user: bool) -> &'static str {
    if from_user {
        "chat-message user"
    } else {
        "chat-message bot"
    }
}
