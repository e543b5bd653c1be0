use crate::storage::PreferenceStore;
use crate::types::ThemeMode;

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

pub const MOON_GLYPH: &str = "🌙";
pub const SUN_GLYPH: &str = "☀️";

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Glyph on the toggle: the mode you would switch *to*.
    pub fn glyph(self) -> &'static str {
        match self {
            ThemeMode::Light => MOON_GLYPH,
            ThemeMode::Dark => SUN_GLYPH,
        }
    }
}

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_glyph: &'static str,
    pub toggle_label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_glyph: mode.glyph(),
            toggle_label: "Cambiar a tema claro",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_glyph: mode.glyph(),
            toggle_label: "Cambiar a tema oscuro",
        },
    }
}

/// Applied theme plus the store it is mirrored into.
pub struct ThemeController {
    mode: ThemeMode,
    store: Box<dyn PreferenceStore>,
}

impl ThemeController {
    /// Initial state comes from the store; anything other than a stored
    /// `"dark"` (including a failing store) starts light.
    pub fn load(store: impl PreferenceStore + 'static) -> Self {
        let mode = match store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => ThemeMode::parse(&raw).unwrap_or_default(),
            Ok(None) => ThemeMode::default(),
            Err(err) => {
                tracing::warn!("could not read theme preference: {err}");
                ThemeMode::default()
            }
        };
        tracing::debug!(theme = mode.as_str(), "theme loaded");
        Self {
            mode,
            store: Box::new(store),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn definition(&self) -> ThemeDefinition {
        theme_definition(self.mode)
    }

    /// Flips the applied mode, then persists it. A failed write is logged
    /// and the new mode is kept.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggle();
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, self.mode.as_str()) {
            tracing::warn!("theme preference not persisted: {err}");
        }
        tracing::info!(theme = self.mode.as_str(), "theme toggled");
        self.mode
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #000000;
    --color-bg-secondary: #0d0d0d;
    --color-text-primary: #ffffff;
    --color-text-muted: #bdbdbd;
    --color-border: #2a2a2a;
    --color-input-bg: #111111;
    --color-input-border: #3a3a3a;
    --color-chat-user-bg: #ffffff;
    --color-chat-user-text: #000000;
    --color-chat-bot-bg: #1a1a1a;
    --color-chat-bot-text: #ffffff;
    --color-overlay: rgba(0, 0, 0, 0.75);
}
body { background-color: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f5f5f5;
    --color-text-primary: #212529;
    --color-text-muted: #6c757d;
    --color-border: #dee2e6;
    --color-input-bg: #ffffff;
    --color-input-border: #ced4da;
    --color-chat-user-bg: #0d6efd;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #e9ecef;
    --color-chat-bot-text: #212529;
    --color-overlay: rgba(0, 0, 0, 0.45);
}
body { background-color: var(--color-bg-primary); color: var(--color-text-primary); }
"#;
