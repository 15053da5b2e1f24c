use crate::api::{ApiClient, ApiError, AuthUser, LoginRequest, SignupRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct LandingRepository {
    client: Rc<ApiClient>,
}

impl Default for LandingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LandingRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthUser, ApiError> {
        self.client.login(&request).await
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<AuthUser, ApiError> {
        self.client.signup(&request).await
    }
}
