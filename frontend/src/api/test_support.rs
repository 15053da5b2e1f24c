pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;

    /// In-process stand-in for the expense API. Routes are matched on method
    /// and path; the newest matching route wins.
    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        hits: Vec<(Method, String, Option<Value>)>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        response: MockResponse,
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            let server = Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    hits: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            };
            register_mock(server.base.clone(), Arc::new(server.clone()));
            server
        }

        pub fn base_url(&self) -> String {
            self.base.clone()
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let mut response = if then.network_error {
                MockResponse::network_error()
            } else {
                MockResponse::json(
                    then.status.unwrap_or(200),
                    then.body.unwrap_or_else(|| serde_json::json!({})),
                )
            };
            response.delay = then.delay;

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                response,
            });
        }

        /// Number of requests received for `method path`.
        pub fn hits(&self, method: Method, path: &str) -> usize {
            let inner = self.inner.lock().expect("mock lock");
            inner
                .hits
                .iter()
                .filter(|(m, p, _)| *m == method && p == path)
                .count()
        }

        /// JSON body of the most recent request to `method path`.
        pub fn last_body(&self, method: Method, path: &str) -> Option<Value> {
            let inner = self.inner.lock().expect("mock lock");
            inner
                .hits
                .iter()
                .rev()
                .find(|(m, p, _)| *m == method && p == path)
                .and_then(|(_, _, body)| body.clone())
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method().clone();
            let path = request.url().path().to_string();
            let body = request
                .body()
                .and_then(|b| b.as_bytes())
                .and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok());
            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApiError::unknown("mock lock"))?;
            inner.hits.push((method.clone(), path.clone(), body));

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == method && route.path == path)
                .cloned();

            route
                .map(|route| route.response)
                .ok_or_else(|| ApiError::unknown(format!("No mock for {} {}", method, path)))
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        network_error: bool,
        delay: Option<Duration>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn network_error(&mut self) -> &mut Self {
            self.network_error = true;
            self
        }

        /// Answers only after `delay` (on the tokio clock).
        pub fn delay(&mut self, delay: Duration) -> &mut Self {
            self.delay = Some(delay);
            self
        }
    }
}
