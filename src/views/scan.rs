use crate::upload::{MAX_UPLOAD_BYTES, format_size};
use crate::views::file_guard::FileGuardInput;
use dioxus::prelude::*;

#[component]
pub fn ScanView() -> Element {
    let limit = format_size(MAX_UPLOAD_BYTES);
    rsx! {
        div { class: "main-container",
            div { class: "section",
                h3 { class: "section-title", "Escanear receta" }
                p { class: "text-muted",
                    "Sube una foto de la receta o de la caja del medicamento (máximo {limit})."
                }
                form {
                    class: "scan-form",
                    method: "post",
                    enctype: "multipart/form-data",
                    onsubmit: move |ev| ev.prevent_default(),
                    FileGuardInput { id: "imagen", name: "imagen" }
                }
            }
        }
    }
}
