use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{api::types::ApiError, config};

/// Decoded `{ success, ...payload }` envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success(T),
    Failure { message: Option<String> },
}

impl<T> Envelope<T> {
    pub fn into_result(self, fallback: &str) -> Result<T, ApiError> {
        match self {
            Envelope::Success(payload) => Ok(payload),
            Envelope::Failure { message } => Err(ApiError::server(
                message.unwrap_or_else(|| fallback.to_string()),
            )),
        }
    }
}

fn failure_message(body: &Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_string)
}

/// Anything other than `success: true` is a failure. A success whose payload
/// does not match `T` is a decode error.
pub fn decode_envelope<T: DeserializeOwned>(body: Value) -> Result<Envelope<T>, ApiError> {
    let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success {
        return Ok(Envelope::Failure {
            message: failure_message(&body),
        });
    }
    serde_json::from_value(body)
        .map(Envelope::Success)
        .map_err(|e| ApiError::decode(format!("Unexpected response: {}", e)))
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        self.client.request(method, format!("{}{}", base_url, path))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if let Some(mocked) = intercept(&request).await {
            return mocked;
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))?;
        if !status.is_success() {
            log::debug!("{} returned {}", status, body);
        }
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let body = self.send(builder).await?;
        decode_envelope(body)?.into_result(fallback)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path).await;
        self.fetch(builder, fallback).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::POST, path).await.json(body);
        self.fetch(builder, fallback).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::PUT, path).await.json(body);
        self.fetch(builder, fallback).await
    }
}

#[cfg(test)]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(test)]
async fn intercept(request: &reqwest::Request) -> Option<Result<Value, ApiError>> {
    let responder = mock_registry::mock_for(request.url())?;
    let response = match responder.respond(request) {
        Ok(response) => response,
        Err(err) => return Some(Err(err)),
    };
    if let Some(delay) = response.delay {
        crate::utils::time::sleep(delay).await;
    }
    Some(response.into_body())
}

#[cfg(not(test))]
async fn intercept(_request: &reqwest::Request) -> Option<Result<Value, ApiError>> {
    None
}

#[cfg(test)]
mod mock_registry {
    use super::ApiError;
    use serde_json::Value;
    use std::{cell::RefCell, collections::HashMap, sync::Arc, time::Duration};

    pub trait TestResponder {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Clone, Debug)]
    pub struct MockResponse {
        pub status: u16,
        pub body: Option<Value>,
        /// Held back this long before the client sees it.
        pub delay: Option<Duration>,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self {
                status,
                body: Some(body),
                delay: None,
            }
        }

        /// Simulates a dropped connection.
        pub fn network_error() -> Self {
            Self {
                status: 0,
                body: None,
                delay: None,
            }
        }

        pub(super) fn into_body(self) -> Result<Value, ApiError> {
            self.body.ok_or_else(|| {
                ApiError::request_failed("Request failed: connection refused".to_string())
            })
        }
    }

    thread_local! {
        static MOCKS: RefCell<HashMap<String, Arc<dyn TestResponder>>> =
            RefCell::new(HashMap::new());
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        MOCKS.with(|mocks| {
            mocks.borrow_mut().insert(base_url, responder);
        });
    }

    pub(super) fn mock_for(url: &reqwest::Url) -> Option<Arc<dyn TestResponder>> {
        let origin = url.origin().ascii_serialization();
        MOCKS.with(|mocks| mocks.borrow().get(&origin).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::AuthPayload;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Count {
        #[serde(default)]
        count: u32,
    }

    #[test]
    fn success_envelope_decodes_payload() {
        let env = decode_envelope::<Count>(json!({ "success": true, "count": 3 })).unwrap();
        assert_eq!(env, Envelope::Success(Count { count: 3 }));
    }

    #[test]
    fn failure_prefers_error_then_message() {
        let env = decode_envelope::<Count>(json!({ "success": false, "error": "Email exists" }))
            .unwrap();
        assert_eq!(
            env,
            Envelope::Failure {
                message: Some("Email exists".into())
            }
        );
        let env =
            decode_envelope::<Count>(json!({ "success": false, "message": "Nope" })).unwrap();
        assert_eq!(env.into_result("fallback").unwrap_err().error, "Nope");
    }

    #[test]
    fn missing_success_flag_is_a_failure_with_fallback() {
        let env = decode_envelope::<Count>(json!({ "count": 3 })).unwrap();
        let err = env.into_result("Authentication failed").unwrap_err();
        assert_eq!(err.error, "Authentication failed");
        assert_eq!(err.code, "SERVER_ERROR");
    }

    #[test]
    fn success_with_wrong_shape_fails_closed() {
        let err = decode_envelope::<AuthPayload>(json!({ "success": true, "user": { "role": "boss" } }))
            .unwrap_err();
        assert_eq!(err.code, "DECODE_ERROR");
        let err = decode_envelope::<AuthPayload>(json!({ "success": true })).unwrap_err();
        assert_eq!(err.code, "DECODE_ERROR");
    }
}
