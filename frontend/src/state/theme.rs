use leptos::*;
use std::rc::Rc;

use crate::{
    config::keys,
    utils::{
        dom::{self, DetachedRoot, SharedRoot},
        storage::{KeyValueStore, MemoryStorage, SharedStore},
    },
};

pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Stored value wins, then the system preference, then dark.
pub fn initial_theme(store: &dyn KeyValueStore, system_dark: Option<bool>) -> Theme {
    if let Some(stored) = store.get(keys::THEME).as_deref().and_then(Theme::parse) {
        return stored;
    }
    match system_dark {
        Some(false) => Theme::Light,
        _ => Theme::Dark,
    }
}

#[derive(Clone)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
    store: SharedStore,
    root: SharedRoot,
}

impl ThemeState {
    pub fn new(store: SharedStore, root: SharedRoot) -> Self {
        let initial = initial_theme(store.as_ref(), dom::prefers_dark_scheme());
        let state = Self {
            theme: create_rw_signal(initial),
            store,
            root,
        };
        state.apply(initial);
        state
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.apply(theme);
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().flipped();
        self.set_theme(next);
    }

    fn apply(&self, theme: Theme) {
        self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        if let Err(err) = self.store.set(keys::THEME, theme.as_str()) {
            log::warn!("theme not persisted: {}", err);
        }
    }
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
        .unwrap_or_else(|| ThemeState::new(MemoryStorage::shared(), Rc::new(DetachedRoot::default())))
}
