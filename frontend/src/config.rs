use serde::{Deserialize, Serialize};
use std::{sync::OnceLock, time::Duration};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const APP_NAME: &str = "AI Expense Transparency";

/// Delay between a successful login/signup and the redirect to `/<role>`.
pub const AUTH_REDIRECT_DELAY: Duration = Duration::from_millis(1500);
/// How long a settings save confirmation stays visible.
pub const SETTINGS_MESSAGE_TTL: Duration = Duration::from_millis(3000);
/// Pause before the user list is reloaded after creating a user.
pub const USER_RELOAD_DELAY: Duration = Duration::from_millis(1000);

pub mod keys {
    pub const THEME: &str = "transparency-ai-theme";
    pub const USER: &str = "user";
    pub const SESSION_ROLE: &str = "userRole";
    pub const SESSION_NAME: &str = "userName";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
mod globals {
    fn read_global(object: &str, keys: [&str; 2]) -> Option<String> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &object.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
            .find(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    }

    pub fn snapshot() -> Option<String> {
        // window.__TRANSPARENCY_ENV = { API_BASE_URL: "..." } (env.js) wins
        read_global("__TRANSPARENCY_ENV", ["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__TRANSPARENCY_CONFIG", ["api_base_url", "API_BASE_URL"]))
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await?;
    if !resp.status().is_success() {
        anyhow::bail!("config.json returned {}", resp.status());
    }
    Ok(resp.json::<RuntimeConfig>().await?)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(existing) = globals::snapshot().as_deref().and_then(normalize_base_url) {
            return cache_base_url(&existing);
        }
        match fetch_runtime_config().await {
            Ok(cfg) => {
                if let Some(url) = cfg.api_base_url.as_deref().and_then(normalize_base_url) {
                    return cache_base_url(&url);
                }
            }
            Err(err) => log::debug!("runtime config not loaded: {:#}", err),
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {}", url);
}
