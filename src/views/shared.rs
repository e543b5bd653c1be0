use dioxus::prelude::*;
use std::path::Path;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

/// Class carried by the transcript container.
pub const TRANSCRIPT_CLASS: &str = "chat-box";

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

// Deferred a frame so freshly appended entries are measured.
const SCROLL_TRANSCRIPT_JS: &str = r#"
requestAnimationFrame(() => {
    const transcript = document.querySelector('.chat-box');
    if (transcript) {
        transcript.scrollTop = transcript.scrollHeight;
    }
});
"#;

pub fn scroll_transcript_to_bottom() {
    let _ = document::eval(SCROLL_TRANSCRIPT_JS);
}

/// Drops the selection of the file input with the given id.
pub fn clear_file_input(id: &str) {
    let script = format!(
        "const input = document.getElementById({id:?}); if (input) {{ input.value = ''; }}"
    );
    let _ = document::eval(&script);
}

pub fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

/// Desktop file engines report full paths; the web reports bare names.
pub fn display_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

/// Modal alert; the page underneath is inert until it is dismissed.
#[component]
pub fn BlockingAlert(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "alert-overlay",
            div { class: "alert-dialog", role: "alertdialog", aria_modal: "true",
                p { class: "alert-message", "{message}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    autofocus: true,
                    onclick: move |_| on_dismiss.call(()),
                    "Aceptar"
                }
            }
        }
    }
}
