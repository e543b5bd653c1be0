use crate::upload::{GuardAction, LatestChange, format_size, guard_action};
use crate::views::shared::{BlockingAlert, clear_file_input, display_file_name};
use dioxus::prelude::*;

/// File input that refuses files over the upload limit: the user gets a
/// blocking alert and the selection is cleared.
#[component]
pub fn FileGuardInput(
    id: String,
    name: String,
    #[props(default = "image/*".to_string())] accept: String,
) -> Element {
    let mut alert = use_signal(|| Option::<String>::None);
    let mut selected = use_signal(|| Option::<(String, Option<u64>)>::None);
    let mut latest = use_signal(LatestChange::default);
    let input_id = id.clone();

    let on_change = move |ev: FormEvent| {
        let ticket = latest.with_mut(LatestChange::begin);
        let input_id = input_id.clone();
        spawn(async move {
            let Some(engine) = ev.files() else {
                return;
            };
            let Some(first) = engine.files().into_iter().next() else {
                selected.set(None);
                return;
            };
            let file_name = display_file_name(&first);
            let size = engine.file_size(&first).await;

            // a newer selection replaced this one while its size was read
            if !latest.peek().is_current(ticket) {
                tracing::debug!(file = %file_name, ticket, "stale file change ignored");
                return;
            }

            match guard_action(&file_name, size) {
                GuardAction::ClearAndAlert { message } => {
                    clear_file_input(&input_id);
                    selected.set(None);
                    alert.set(Some(message));
                }
                GuardAction::Keep { name, size } => selected.set(Some((name, size))),
            }
        });
    };

    let selection_info = selected().map(|(file_name, size)| match size {
        Some(size) => format!("{file_name} · {}", format_size(size)),
        None => file_name,
    });

    rsx! {
        div { class: "file-guard",
            input {
                id: "{id}",
                name: "{name}",
                class: "form-control",
                r#type: "file",
                accept: "{accept}",
                onchange: on_change,
            }
            if let Some(info) = selection_info {
                small { class: "text-muted file-guard-info", "{info}" }
            }
            if let Some(message) = alert() {
                BlockingAlert { message, on_dismiss: move |_| alert.set(None) }
            }
        }
    }
}
