use leptos::*;

use crate::{
    api::{AuthUser, Role},
    config::keys,
    utils::storage::{MemoryStorage, SharedStore},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub user_name: String,
}

impl Session {
    pub fn from_user(user: &AuthUser) -> Self {
        Self {
            role: user.role,
            user_name: user.display_name(),
        }
    }
}

/// Client-held login hint. The role and name live in tab-scoped storage;
/// the full user object returned by the server is kept in persistent storage.
#[derive(Clone)]
pub struct SessionState {
    session: RwSignal<Option<Session>>,
    tab: SharedStore,
    persistent: SharedStore,
}

impl SessionState {
    pub fn new(tab: SharedStore, persistent: SharedStore) -> Self {
        let initial = load_session(&tab, &persistent);
        Self {
            session: create_rw_signal(initial),
            tab,
            persistent,
        }
    }

    pub fn current(&self) -> ReadSignal<Option<Session>> {
        self.session.read_only()
    }

    pub fn establish(&self, user: &AuthUser) -> Session {
        let session = Session::from_user(user);
        match serde_json::to_string(user) {
            Ok(raw) => warn_on_err(self.persistent.set(keys::USER, &raw)),
            Err(err) => log::warn!("user not serialized: {}", err),
        }
        warn_on_err(self.tab.set(keys::SESSION_ROLE, session.role.label()));
        warn_on_err(self.tab.set(keys::SESSION_NAME, &session.user_name));
        self.session.set(Some(session.clone()));
        session
    }

    pub fn clear(&self) {
        self.tab.remove(keys::SESSION_ROLE);
        self.tab.remove(keys::SESSION_NAME);
        self.persistent.remove(keys::USER);
        self.session.set(None);
    }

    /// Name to show in the shell for `role`.
    pub fn display_name(&self, role: Role) -> String {
        self.session
            .with(|session| {
                session
                    .as_ref()
                    .filter(|s| s.role == role)
                    .map(|s| s.user_name.clone())
            })
            .unwrap_or_else(|| role.default_user_name().to_string())
    }

    pub fn stored_user(&self) -> Option<AuthUser> {
        let raw = self.persistent.get(keys::USER)?;
        serde_json::from_str(&raw).ok()
    }
}

fn warn_on_err(result: Result<(), String>) {
    if let Err(err) = result {
        log::warn!("session storage write failed: {}", err);
    }
}

fn load_session(tab: &SharedStore, persistent: &SharedStore) -> Option<Session> {
    if let Some(role) = tab.get(keys::SESSION_ROLE).and_then(|r| r.parse::<Role>().ok()) {
        let user_name = tab
            .get(keys::SESSION_NAME)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| role.default_user_name().to_string());
        return Some(Session { role, user_name });
    }
    persistent
        .get(keys::USER)
        .and_then(|raw| serde_json::from_str::<AuthUser>(&raw).ok())
        .map(|user| Session::from_user(&user))
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
        .unwrap_or_else(|| SessionState::new(MemoryStorage::shared(), MemoryStorage::shared()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::with_runtime;
    use crate::utils::storage::KeyValueStore;
    use serde_json::json;
    use std::rc::Rc;

    fn user(role: &str, name: &str) -> AuthUser {
        serde_json::from_value(json!({ "role": role, "username": name, "id": 4 })).unwrap()
    }

    #[test]
    fn establish_writes_both_stores() {
        with_runtime(|| {
            let tab = MemoryStorage::new();
            let persistent = MemoryStorage::new();
            let state = SessionState::new(Rc::new(tab.clone()), Rc::new(persistent.clone()));
            assert!(state.current().get_untracked().is_none());

            let session = state.establish(&user("auditor", "ivy"));
            assert_eq!(session.role, Role::Auditor);
            assert_eq!(tab.get(keys::SESSION_ROLE).as_deref(), Some("Auditor"));
            assert_eq!(tab.get(keys::SESSION_NAME).as_deref(), Some("ivy"));
            assert_eq!(state.stored_user(), Some(user("auditor", "ivy")));
            assert_eq!(state.display_name(Role::Auditor), "ivy");
        });
    }

    #[test]
    fn clear_removes_session_keys() {
        with_runtime(|| {
            let tab = MemoryStorage::new();
            let persistent = MemoryStorage::new();
            let state = SessionState::new(Rc::new(tab.clone()), Rc::new(persistent.clone()));
            state.establish(&user("admin", "root"));
            state.clear();
            assert!(tab.is_empty());
            assert!(persistent.is_empty());
            assert!(state.current().get_untracked().is_none());
            assert_eq!(state.display_name(Role::Admin), "Admin User");
        });
    }

    #[test]
    fn loads_from_tab_storage_then_persisted_user() {
        with_runtime(|| {
            let tab = MemoryStorage::new();
            tab.set(keys::SESSION_ROLE, "Employee").unwrap();
            let state = SessionState::new(Rc::new(tab), MemoryStorage::shared());
            assert_eq!(
                state.current().get_untracked(),
                Some(Session {
                    role: Role::Employee,
                    user_name: "Employee User".into()
                })
            );

            let persistent = MemoryStorage::new();
            persistent
                .set(keys::USER, r#"{"role":"admin","email":"max@corp.io"}"#)
                .unwrap();
            let state = SessionState::new(MemoryStorage::shared(), Rc::new(persistent));
            assert_eq!(state.display_name(Role::Admin), "max");
        });
    }

    #[test]
    fn display_name_ignores_session_of_other_role() {
        with_runtime(|| {
            let state = use_session();
            state.establish(&user("employee", "eve"));
            assert_eq!(state.display_name(Role::Auditor), "Auditor User");
        });
    }
}
