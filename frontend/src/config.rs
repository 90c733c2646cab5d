use serde::{Deserialize, Serialize};
use std::{sync::OnceLock, time::Duration};

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

/// Account and bank details printed on the salary transfer letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterProfile {
    pub company_name: String,
    pub account_number: String,
    pub bank_name: String,
    pub bank_branch_lines: Vec<String>,
    pub signatory_title: String,
}

impl Default for LetterProfile {
    fn default() -> Self {
        Self {
            company_name: "Graphics Action".into(),
            account_number: "2781100021682".into(),
            bank_name: "Dutch-Bangla Bank Limited".into(),
            bank_branch_lines: vec!["Gaibandha Branch, Gaibandha.".into()],
            signatory_title: "Authorized Signatory".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub api_base_url: String,
    pub search_debounce_ms: u64,
    pub currency_label: String,
    pub transfer_letter: LetterProfile,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            currency_label: "TAKA".into(),
            transfer_letter: LetterProfile::default(),
        }
    }
}

impl RuntimeConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str::<RuntimeConfig>(raw) {
            Ok(cfg) => Some(cfg),
            Err(err) => {
                log::warn!("ignoring malformed runtime config: {}", err);
                None
            }
        }
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

/// Resolved configuration, or the built-in defaults before `init` finished.
pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let loaded = load().await;
    RUNTIME_CONFIG.get_or_init(|| loaded).clone()
}

pub async fn await_api_base_url() -> String {
    await_runtime_config().await.api_base_url
}

pub async fn init() {
    let cfg = await_runtime_config().await;
    log::info!("runtime config ready (api: {})", cfg.api_base_url);
}

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn global(name: &str) -> Option<JsValue> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            None
        } else {
            Some(any)
        }
    }

    // window.__HRDESK_ENV = { API_BASE_URL: "..." } written by env.js
    pub(super) fn env_base_url() -> Option<String> {
        let obj = global("__HRDESK_ENV")?;
        js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok())
            .and_then(|v| v.as_string())
    }

    pub(super) fn window_config() -> Option<RuntimeConfig> {
        let obj = global("__HRDESK_CONFIG")?;
        let raw = js_sys::JSON::stringify(&obj).ok()?;
        RuntimeConfig::from_json(&String::from(raw))
    }

    pub(super) async fn fetch_config_json() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        let raw = resp.text().await.ok()?;
        RuntimeConfig::from_json(&raw)
    }
}

#[cfg(target_arch = "wasm32")]
async fn load() -> RuntimeConfig {
    let mut cfg = match globals::window_config() {
        Some(cfg) => cfg,
        None => globals::fetch_config_json().await.unwrap_or_default(),
    };
    if let Some(url) = globals::env_base_url() {
        cfg.api_base_url = url;
    }
    cfg
}

#[cfg(not(target_arch = "wasm32"))]
async fn load() -> RuntimeConfig {
    RuntimeConfig::default()
}
