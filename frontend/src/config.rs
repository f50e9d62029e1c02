use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config.json request failed: {0}")]
    Request(String),
    #[error("config.json returned status {0}")]
    Status(u16),
    #[error("config.json could not be parsed: {0}")]
    Parse(String),
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global_key(_global: &str, _keys: &[&str]) -> Option<String> {
    None
}

fn snapshot_from_globals() -> Option<String> {
    // window.__WORKHUB_ENV (env.js) wins over window.__WORKHUB_CONFIG
    read_global_key("__WORKHUB_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__WORKHUB_CONFIG", &["api_base_url", "API_BASE_URL"]))
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

pub(crate) fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    let resp = reqwest::get("./config.json")
        .await
        .map_err(|e| ConfigError::Request(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(ConfigError::Status(resp.status().as_u16()));
    }
    resp.json::<RuntimeConfig>()
        .await
        .map_err(|e| ConfigError::Parse(e.to_string()))
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(RuntimeConfig {
            api_base_url: Some(url),
        }) => return cache_base_url(&url),
        Ok(_) => log::debug!("config.json has no api_base_url"),
        Err(err) => log::warn!("Runtime config unavailable: {}", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL resolved to {}", base);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_trims_trailing_slashes_and_whitespace() {
        assert_eq!(
            normalize_base_url(" https://hr.example.com/api/ "),
            "https://hr.example.com/api"
        );
        assert_eq!(normalize_base_url(DEFAULT_API_BASE_URL), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn runtime_config_tolerates_missing_fields() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.api_base_url.is_none());
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"http://api.local"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("http://api.local"));
    }

    #[test]
    fn config_error_messages_name_the_failure() {
        assert_eq!(
            ConfigError::Status(404).to_string(),
            "config.json returned status 404"
        );
    }
}
