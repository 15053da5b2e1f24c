use super::utils;
use crate::{
    api::{ApiClient, ManagedUser, UserDirectory},
    config,
    utils::{message::MessageState, time::sleep},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct NewUserForm {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub department: RwSignal<String>,
}

impl Default for NewUserForm {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
        }
    }
}

impl NewUserForm {
    fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.department.set(String::new());
    }
}

#[derive(Clone)]
pub struct UsersViewModel {
    pub directory: RwSignal<Option<UserDirectory>>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    pub query: RwSignal<String>,
    pub form: NewUserForm,
    pub form_open: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub form_error: RwSignal<Option<String>>,
    pub notice: RwSignal<MessageState>,
    client: Rc<ApiClient>,
}

impl UsersViewModel {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self {
            directory: create_rw_signal(None),
            loading: create_rw_signal(true),
            load_error: create_rw_signal(None),
            query: create_rw_signal(String::new()),
            form: NewUserForm::default(),
            form_open: create_rw_signal(false),
            submitting: create_rw_signal(false),
            form_error: create_rw_signal(None),
            notice: create_rw_signal(MessageState::default()),
            client,
        }
    }

    pub fn filtered_users(&self) -> Signal<Vec<ManagedUser>> {
        let directory = self.directory;
        let query = self.query;
        Signal::derive(move || {
            directory.with(|dir| match dir {
                Some(dir) => query.with(|q| utils::filter_users(&dir.users, q)),
                None => Vec::new(),
            })
        })
    }

    pub fn open_form(&self) {
        self.form_error.set(None);
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
    }

    pub async fn load(&self) {
        self.loading.set(true);
        match self.client.get_users().await {
            Ok(directory) => {
                self.directory.set(Some(directory));
                self.load_error.set(None);
            }
            Err(err) => {
                log::error!("user directory not loaded: {}", err);
                self.load_error.set(Some(err.error));
            }
        }
        self.loading.set(false);
    }

    /// Creates the user, then reloads the directory after a short pause.
    pub async fn add_user(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        self.form_error.set(None);
        self.notice.update(MessageState::clear);

        let request = match utils::build_new_user(
            &self.form.name.get_untracked(),
            &self.form.email.get_untracked(),
            &self.form.department.get_untracked(),
        ) {
            Ok(request) => request,
            Err(msg) => {
                self.form_error.set(Some(msg.to_string()));
                return;
            }
        };

        self.submitting.set(true);
        let result = self.client.create_user(&request).await;
        self.submitting.set(false);

        match result {
            Ok(()) => {
                log::info!("created user {}", request.email);
                self.notice.update(|n| n.set_success(utils::USER_CREATED));
                self.form.reset();
                self.form_open.set(false);
                sleep(config::USER_RELOAD_DELAY).await;
                self.load().await;
                self.notice.update(MessageState::clear);
            }
            Err(err) => {
                log::warn!("user not created: {}", err);
                self.form_error.set(Some(err.error));
            }
        }
    }
}

pub fn use_users_view_model() -> UsersViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    UsersViewModel::new(Rc::new(api))
}
