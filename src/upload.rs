/// Largest file a file input will keep selected (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadVerdict {
    Accepted { name: String, size: u64 },
    Rejected { name: String, size: u64 },
}

impl UploadVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, UploadVerdict::Accepted { .. })
    }

    /// Text for the blocking alert; `None` when nothing should be shown.
    pub fn alert_message(&self) -> Option<String> {
        match self {
            UploadVerdict::Accepted { .. } => None,
            UploadVerdict::Rejected { name, size } => Some(format!(
                "El archivo \"{name}\" pesa {} y supera el límite de {}. Selecciona un archivo más pequeño.",
                format_size(*size),
                format_size(MAX_UPLOAD_BYTES),
            )),
        }
    }
}

/// Client-side size check for the first selected file. The server still
/// owns the real limit.
pub fn inspect_upload(name: &str, size: u64) -> UploadVerdict {
    let name = name.to_string();
    if size > MAX_UPLOAD_BYTES {
        tracing::warn!(file = %name, size, limit = MAX_UPLOAD_BYTES, "file rejected");
        UploadVerdict::Rejected { name, size }
    } else {
        tracing::info!(file = %name, size, "file accepted");
        UploadVerdict::Accepted { name, size }
    }
}

/// What a file input should do with a new selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardAction {
    /// Leave the selection alone. `size` is `None` when the platform could
    /// not report it; the server check still applies then.
    Keep { name: String, size: Option<u64> },
    ClearAndAlert { message: String },
}

pub fn guard_action(name: &str, size: Option<u64>) -> GuardAction {
    let Some(size) = size else {
        tracing::warn!(file = %name, "file size unavailable, leaving it to the server");
        return GuardAction::Keep {
            name: name.to_string(),
            size: None,
        };
    };

    let verdict = inspect_upload(name, size);
    if verdict.is_accepted() {
        GuardAction::Keep {
            name: name.to_string(),
            size: Some(size),
        }
    } else {
        GuardAction::ClearAndAlert {
            message: verdict.alert_message().unwrap_or_default(),
        }
    }
}

/// Orders overlapping change events on one input. Each change takes a
/// ticket; only the newest ticket may act once its file size arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatestChange {
    current: u64,
}

impl LatestChange {
    pub fn begin(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}

pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    let value = bytes as f64;
    if value >= MIB {
        format!("{:.1} MB", value / MIB)
    } else if value >= KIB {
        format!("{:.0} KB", value / KIB)
    } else {
        format!("{bytes} B")
    }
}
