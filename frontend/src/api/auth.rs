use super::{
    client::ApiClient,
    types::{ApiError, AuthPayload, AuthUser, LoginRequest, SignupRequest},
};

pub const AUTH_FAILED: &str = "Authentication failed";

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthUser, ApiError> {
        let payload: AuthPayload = self
            .post_json("/api/auth/login", request, AUTH_FAILED)
            .await?;
        Ok(payload.user)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthUser, ApiError> {
        let payload: AuthPayload = self
            .post_json("/api/auth/signup", request, AUTH_FAILED)
            .await?;
        Ok(payload.user)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{
        test_support::mock::{MockServer, POST},
        types::Role,
    };
    use serde_json::json;

    fn login_request() -> LoginRequest {
        LoginRequest {
            email: "a@b.com".into(),
            password: "x".into(),
        }
    }

    #[tokio::test]
    async fn login_returns_user_on_success() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200)
                .json_body(json!({ "success": true, "user": { "role": "employee" } }));
        });
        let client = ApiClient::new_with_base_url(server.base_url());
        let user = client.login(&login_request()).await.unwrap();
        assert_eq!(user.role, Role::Employee);
    }

    #[tokio::test]
    async fn signup_surfaces_server_error_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/signup");
            then.status(409)
                .json_body(json!({ "success": false, "error": "Email exists" }));
        });
        let client = ApiClient::new_with_base_url(server.base_url());
        let err = client
            .signup(&SignupRequest {
                email: "a@b.com".into(),
                username: "ann".into(),
                password: "x".into(),
                role: Role::Auditor,
            })
            .await
            .unwrap_err();
        assert_eq!(err.error, "Email exists");
    }

    #[tokio::test]
    async fn login_without_message_uses_fallback() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(500).json_body(json!({ "success": false }));
        });
        let client = ApiClient::new_with_base_url(server.base_url());
        let err = client.login(&login_request()).await.unwrap_err();
        assert_eq!(err.error, AUTH_FAILED);
    }

    #[tokio::test]
    async fn login_network_failure_is_request_failed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.network_error();
        });
        let client = ApiClient::new_with_base_url(server.base_url());
        let err = client.login(&login_request()).await.unwrap_err();
        assert!(err.is_network());
    }
}
