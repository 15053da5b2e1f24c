#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::{
        api::{ApiClient, AuthUser},
        state::AppState,
        utils::{dom::DetachedRoot, storage::MemoryStorage},
    };
    use leptos::*;
    use std::rc::Rc;

    pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    /// Storage and DOM doubles backing an [`AppState`] under test.
    #[derive(Clone, Default)]
    pub struct Fixture {
        pub persistent: MemoryStorage,
        pub tab: MemoryStorage,
        pub root: DetachedRoot,
    }

    impl Fixture {
        pub fn app_state(&self) -> AppState {
            AppState::new(
                Rc::new(self.persistent.clone()),
                Rc::new(self.tab.clone()),
                Rc::new(self.root.clone()),
            )
        }
    }

    /// Provides app state (and optionally an API client) in the current runtime.
    pub fn provide_app(api: Option<ApiClient>) -> (AppState, Fixture) {
        let fixture = Fixture::default();
        let state = fixture.app_state().provide();
        if let Some(api) = api {
            provide_context(api);
        }
        (state, fixture)
    }

    pub fn auth_user(role: &str, username: &str) -> AuthUser {
        serde_json::from_value(serde_json::json!({ "role": role, "username": username }))
            .expect("valid user")
    }
}
