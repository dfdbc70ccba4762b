//! Theme state and persistence
//!
//! Resolves the initial light/dark preference from local storage, then
//! the OS color-scheme query, and applies it by toggling the `dark`
//! class on the document root. That class toggle is the single DOM side
//! effect for theming; everything else consumes the theme through
//! context.

use leptos::*;

/// Local-storage slot holding the persisted preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse the persisted string form; anything unknown is rejected
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Resolve the theme to show on first paint
///
/// A persisted choice always wins over the OS preference.
pub fn resolve_initial(saved: Option<Theme>, os_prefers_dark: bool) -> Theme {
    match saved {
        Some(theme) => theme,
        None if os_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Theme state shared through context
///
/// `mounted` flips true once the theme has been resolved and applied;
/// consumers suppress rendering until then to avoid a flash of the wrong
/// theme.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
    pub mounted: RwSignal<bool>,
}

impl ThemeState {
    /// Flip the theme, re-apply it, and persist the new choice
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        persist_theme(next);
    }
}

/// Resolve, apply and provide the theme for the component tree below
pub fn provide_theme() -> ThemeState {
    let initial = resolve_initial(load_saved_theme(), os_prefers_dark());
    let state = ThemeState {
        theme: create_rw_signal(initial),
        mounted: create_rw_signal(false),
    };

    // Apply before anything under the provider paints; the effect keeps
    // the document in sync on every toggle afterwards.
    apply_to_document(initial);
    create_effect(move |_| {
        apply_to_document(state.theme.get());
        if !state.mounted.get_untracked() {
            state.mounted.set(true);
        }
    });

    provide_context(state);
    state
}

// ============================================================================
// Boundary adapters (the only DOM access for theming)
// ============================================================================

/// Toggle the `dark` class on the document root
fn apply_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let class_list = root.class_list();
    let result = match theme {
        Theme::Dark => class_list.add_1("dark"),
        Theme::Light => class_list.remove_1("dark"),
    };
    if result.is_err() {
        tracing::warn!("failed to apply theme class to document root");
    }
}

fn load_saved_theme() -> Option<Theme> {
    local_storage()?
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|value| Theme::parse(&value))
}

/// Best-effort persistence; storage being unavailable is not fatal
fn persist_theme(theme: Theme) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
                tracing::warn!("failed to persist theme preference");
            }
        }
        None => tracing::warn!("local storage unavailable, theme preference not persisted"),
    }
}

fn os_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
