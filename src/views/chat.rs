use crate::chat::{
    ReplyFrame, ReplyOutcome, Submission, Transcript, WallClockScheduler, abortable_reply,
    should_submit, submit_on_keydown,
};
use crate::config::AppConfig;
use crate::types::{ChatMessage, MessageState, Sender};
use crate::views::shared::{
    TRANSCRIPT_CLASS, format_message_timestamp, scroll_transcript_to_bottom,
};
use dioxus::events::Key;
use dioxus::prelude::*;

fn sender_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "user",
        Sender::Bot => "bot",
    }
}

fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "Tú",
        Sender::Bot => "Bot",
    }
}

#[component]
pub fn ChatView() -> Element {
    let reply_policy = use_context::<AppConfig>().reply_policy;
    let mut transcript = use_signal(Transcript::new);
    let mut draft = use_signal(String::new);

    use_effect(move || {
        let _ = transcript.read().len();
        scroll_transcript_to_bottom();
    });

    // the reply task is scoped to this view and dropped with it
    let mut start_reply = move |submission: Submission| {
        draft.set(String::new());

        let bot_index = submission.bot_index;
        let (reply, _handle) = abortable_reply(
            submission.text,
            reply_policy,
            WallClockScheduler,
            move |frame: ReplyFrame| transcript.with_mut(|t| t.apply(bot_index, &frame)),
        );
        spawn(async move {
            if reply.await == ReplyOutcome::Cancelled {
                tracing::debug!(bot_index, "reply dropped before completion");
            }
        });
    };

    let messages = transcript.read().messages().to_vec();

    rsx! {
        div { class: "main-container",
            div { class: "chat-wrap",
                div { class: TRANSCRIPT_CLASS,
                    if messages.is_empty() {
                        p { class: "chat-empty text-muted",
                            "Pregunta lo que quieras sobre tus medicamentos."
                        }
                    }
                    for (i, msg) in messages.iter().enumerate() {
                        MessageRow { key: "{i}", message: msg.clone() }
                    }
                }
            }

            form {
                class: "composer d-flex",
                method: "post",
                onsubmit: move |ev: FormEvent| {
                    ev.prevent_default();
                    let text = draft();
                    if let Some(submission) = transcript.with_mut(|t| t.submit(&text)) {
                        start_reply(submission);
                    }
                },
                input {
                    class: "form-control",
                    r#type: "text",
                    name: "mensaje",
                    placeholder: "Escribe tu pregunta…",
                    autocomplete: "off",
                    autofocus: true,
                    value: "{draft}",
                    oninput: move |ev| draft.set(ev.value()),
                    onkeydown: move |ev| {
                        let is_enter = ev.key() == Key::Enter;
                        let shift_held = ev.modifiers().shift();
                        if should_submit(is_enter, shift_held) {
                            ev.prevent_default();
                        }
                        let text = draft();
                        let submitted = transcript
                            .with_mut(|t| submit_on_keydown(is_enter, shift_held, &text, t));
                        if let Some(submission) = submitted {
                            start_reply(submission);
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: draft().trim().is_empty(),
                    "Enviar"
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    let role = sender_class(message.sender);
    let label = sender_label(message.sender);
    let state_class = match message.state {
        MessageState::Typing => "typing",
        MessageState::Revealing => "revealing",
        MessageState::Complete => "",
    };

    rsx! {
        div { class: "message-row {role}",
            div { class: "message-stack",
                span { class: "message-sender", "{label}" }
                div { class: "bubble {role} {state_class}",
                    if message.state == MessageState::Typing {
                        span { class: "typing-indicator", "Escribiendo…" }
                    } else {
                        "{message.text}"
                    }
                }
                if let Some(ts) = format_message_timestamp(message.created_at) {
                    span { class: "message-timestamp", "{ts}" }
                }
            }
        }
    }
}
