use crate::config::AppConfig;
use crate::storage::platform_store;
use crate::theme::{ThemeController, theme_definition};
use crate::types::ThemeMode;
use crate::views::{ChatView, ScanView};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Fixed inline styling of the injected theme toggle.
const THEME_TOGGLE_STYLE: &str = "position: fixed; top: 1rem; right: 1rem; z-index: 1000; \
     font-size: 1.25rem; line-height: 1; padding: 0.4rem 0.55rem; border-radius: 999px; \
     border: 1px solid var(--color-border); background: var(--color-bg-secondary); cursor: pointer;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppTab {
    Chat,
    Scan,
}

impl AppTab {
    const ALL: [AppTab; 2] = [AppTab::Chat, AppTab::Scan];

    fn label(self) -> &'static str {
        match self {
            AppTab::Chat => "Chat",
            AppTab::Scan => "Escanear",
        }
    }
}

fn tab_class(active: AppTab, tab: AppTab) -> &'static str {
    if active == tab { "tab active" } else { "tab" }
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(AppConfig::from_env);
    let theme = use_signal(|| ThemeController::load(platform_store(config.data_dir.clone())));
    let active_tab = use_signal(|| AppTab::Chat);
    let mode = theme.read().mode();

    rsx! {
        ThemeStyles { mode }
        ThemeToggle { theme }
        AppHeader { active_tab }
        // both panels stay mounted; switching tabs only toggles `hidden`
        section { class: "panel", hidden: active_tab() != AppTab::Chat, ChatView {} }
        section { class: "panel", hidden: active_tab() != AppTab::Scan, ScanView {} }
    }
}

#[component]
fn ThemeStyles(mode: ThemeMode) -> Element {
    let definition = theme_definition(mode);
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn ThemeToggle(theme: Signal<ThemeController>) -> Element {
    let mut theme = theme;
    let definition = theme.read().definition();
    rsx! {
        button {
            id: "themeToggle",
            r#type: "button",
            style: THEME_TOGGLE_STYLE,
            title: definition.toggle_label,
            aria_label: definition.toggle_label,
            onclick: move |_| {
                theme.write().toggle();
            },
            "{definition.toggle_glyph}"
        }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>) -> Element {
    let mut active_tab = active_tab;
    rsx! {
        header { class: "header",
            div { class: "header-content",
                span { class: "header-wordmark", "MediChat" }
                nav { class: "tabs", role: "tablist",
                    for tab in AppTab::ALL {
                        button {
                            key: "{tab.label()}",
                            class: tab_class(active_tab(), tab),
                            r#type: "button",
                            role: "tab",
                            aria_selected: (active_tab() == tab).to_string(),
                            onclick: move |_| active_tab.set(tab),
                            "{tab.label()}"
                        }
                    }
                }
            }
        }
    }
}
