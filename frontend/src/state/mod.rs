pub mod session;
pub mod theme;

use leptos::*;

use crate::utils::{
    dom::{self, SharedRoot},
    storage::{self, SharedStore},
};
use session::SessionState;
use theme::ThemeState;

/// Process-wide UI state, initialized from storage once at start-up.
#[derive(Clone)]
pub struct AppState {
    pub theme: ThemeState,
    pub session: SessionState,
}

impl AppState {
    pub fn new(persistent: SharedStore, tab: SharedStore, root: SharedRoot) -> Self {
        Self {
            theme: ThemeState::new(persistent.clone(), root),
            session: SessionState::new(tab, persistent),
        }
    }

    pub fn from_browser() -> Self {
        Self::new(
            storage::persistent_store(),
            storage::session_store(),
            dom::document_root(),
        )
    }

    pub fn provide(self) -> Self {
        provide_context(self.theme.clone());
        provide_context(self.session.clone());
        self
    }
}
