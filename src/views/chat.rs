use crate::chat::{ChatSession, ChatSnapshot};
use crate::config::AppConfig;
use dioxus::events::Key;
use dioxus::prelude::*;
use std::rc::Rc;

fn message_class(is_user: bool) -> &'static str {
    if is_user {
        "chat-message user"
    } else {
        "chat-message assistant"
    }
}

fn can_send(input: &str, pending: bool) -> bool {
    !input.trim().is_empty() && !pending
}

/// Keep a signal in step with the session's published snapshots.
fn use_chat_snapshot(session: &Rc<ChatSession>) -> Signal<ChatSnapshot> {
    let mut snapshot = use_signal(|| session.snapshot());
    let session = session.clone();
    use_hook(move || {
        let mut changes = session.subscribe();
        spawn(async move {
            while changes.changed().await.is_ok() {
                let next = changes.borrow_and_update().clone();
                snapshot.set(next);
            }
        });
    });
    snapshot
}

#[component]
pub fn ChatWidget() -> Element {
    let reply_delay = use_context::<AppConfig>().reply_delay;
    // Dropped with the component, which aborts any outstanding reply.
    let session = use_hook(|| Rc::new(ChatSession::new(reply_delay)));
    let snapshot = use_chat_snapshot(&session);
    let mut input = use_signal(String::new);

    let send_message = {
        let session = session.clone();
        move |text: String| {
            if session.send(&text) {
                input.set(String::new());
            }
        }
    };
    let mut send_on_enter = send_message.clone();
    let mut send_on_click = send_message;

    let current = snapshot();

    rsx! {
        div { class: "chat-messages",
            for (i, msg) in current.history.iter().enumerate() {
                div { key: "{i}", class: message_class(msg.is_user), "{msg.text}" }
            }
            if current.pending {
                div { class: message_class(false),
                    div { class: "typing",
                        span {}
                        span {}
                        span {}
                    }
                }
            }
        }

        div { class: "chat-container",
            div { class: "chat-box",
                textarea {
                    rows: "1",
                    placeholder: "Ask me about the brain...",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter && !ev.modifiers().shift() {
                            ev.prevent_default();
                            send_on_enter(input());
                        }
                    },
                }
                button {
                    class: "send-button",
                    r#type: "button",
                    disabled: !can_send(&input(), current.pending),
                    onclick: move |_| send_on_click(input()),
                    "➤"
                }
            }
        }
    }
}
