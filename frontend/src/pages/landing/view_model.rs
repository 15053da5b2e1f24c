use super::{
    repository::LandingRepository,
    utils::{self, AuthMode},
};
use crate::{
    api::{ApiClient, LoginRequest, Role, SignupRequest},
    config,
    state::session::{use_session, SessionState},
    utils::{message::MessageState, time::sleep},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct LandingFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub username: RwSignal<String>,
    pub role: RwSignal<Role>,
}

impl Default for LandingFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            username: create_rw_signal(String::new()),
            role: create_rw_signal(Role::Employee),
        }
    }
}

#[derive(Clone)]
pub struct LandingViewModel {
    pub form: LandingFormState,
    pub mode: RwSignal<AuthMode>,
    pub message: RwSignal<MessageState>,
    pub loading: RwSignal<bool>,
    /// Set once a login or signup has succeeded and the redirect delay elapsed.
    pub redirect: RwSignal<Option<String>>,
    repository: LandingRepository,
    session: SessionState,
}

impl LandingViewModel {
    pub fn new(repository: LandingRepository, session: SessionState) -> Self {
        Self {
            form: LandingFormState::default(),
            mode: create_rw_signal(AuthMode::Login),
            message: create_rw_signal(MessageState::default()),
            loading: create_rw_signal(false),
            redirect: create_rw_signal(None),
            repository,
            session,
        }
    }

    pub fn toggle_mode(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
        self.message.update(MessageState::clear);
    }

    pub async fn submit(&self) {
        if self.loading.get_untracked() {
            return;
        }
        let mode = self.mode.get_untracked();
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        let username = self.form.username.get_untracked();

        if let Err(msg) = utils::validate_credentials(mode, &email, &password, &username) {
            self.message.update(|m| m.set_error(msg));
            return;
        }

        self.loading.set(true);
        self.message.update(MessageState::clear);

        let result = match mode {
            AuthMode::Login => {
                self.repository
                    .login(LoginRequest { email, password })
                    .await
            }
            AuthMode::Signup => {
                self.repository
                    .signup(SignupRequest {
                        email,
                        username,
                        password,
                        role: self.form.role.get_untracked(),
                    })
                    .await
            }
        };
        self.loading.set(false);

        match result {
            Ok(user) => {
                let session = self.session.establish(&user);
                log::info!("authenticated as {}", session.role.as_str());
                self.message.update(|m| m.set_success(mode.success_text()));
                sleep(config::AUTH_REDIRECT_DELAY).await;
                self.redirect.set(Some(session.role.home_path()));
            }
            Err(err) => {
                log::warn!("authentication failed: {}", err);
                let text = utils::failure_text(&err);
                self.message.update(|m| m.set_error(text));
            }
        }
    }
}

pub fn use_landing_view_model() -> LandingViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LandingRepository::new_with_client(Rc::new(api));
    LandingViewModel::new(repository, use_session())
}
