//! Frontend configuration: backend address, request timeout and log level.
//!
//! Values are layered. Compiled-in defaults are overridden by `STOREFRONT_*`
//! variables captured at build time, which are in turn overridden by the
//! optional `window.STOREFRONT_CONFIG` object so a static deployment can point
//! at another backend without rebuilding. Everything here ships to the
//! browser; never put secrets in it.

use tracing::level_filters::LevelFilter;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Resolves the effective configuration for this page load.
    pub fn load() -> Self {
        let config = Self::default().with(Layer::from_lookup(build_value));
        match runtime_lookup() {
            Some(lookup) => config.with(Layer::from_lookup(lookup)),
            None => config,
        }
    }

    fn with(mut self, layer: Layer) -> Self {
        if let Some(value) = layer.api_base_url {
            self.api_base_url = value;
        }
        if let Some(value) = layer.request_timeout_ms {
            self.request_timeout_ms = value;
        }
        if let Some(value) = layer.log_level {
            self.log_level = value;
        }
        self
    }

    /// Unknown level names fall back to `INFO`.
    pub fn log_level_filter(&self) -> LevelFilter {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "off" => LevelFilter::OFF,
            "error" => LevelFilter::ERROR,
            "warn" | "warning" => LevelFilter::WARN,
            "debug" => LevelFilter::DEBUG,
            "trace" => LevelFilter::TRACE,
            _ => LevelFilter::INFO,
        }
    }
}

/// Setting names shared by the build environment (upper-cased, with the
/// `STOREFRONT_` prefix) and the runtime object.
const API_BASE_URL: &str = "api_base_url";
const REQUEST_TIMEOUT_MS: &str = "request_timeout_ms";
const LOG_LEVEL: &str = "log_level";

/// One source of overrides. Blank values and non-positive timeouts are
/// treated as unset.
#[derive(Debug, Default, PartialEq)]
struct Layer {
    api_base_url: Option<String>,
    request_timeout_ms: Option<u32>,
    log_level: Option<String>,
}

impl Layer {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str| lookup(key).and_then(|value| non_blank(&value));
        Self {
            api_base_url: text(API_BASE_URL),
            request_timeout_ms: text(REQUEST_TIMEOUT_MS).and_then(|value| parse_timeout(&value)),
            log_level: text(LOG_LEVEL),
        }
    }
}

fn build_value(key: &str) -> Option<String> {
    let value = match key {
        API_BASE_URL => option_env!("STOREFRONT_API_BASE_URL"),
        REQUEST_TIMEOUT_MS => option_env!("STOREFRONT_REQUEST_TIMEOUT_MS"),
        LOG_LEVEL => option_env!("STOREFRONT_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(target_arch = "wasm32")]
fn runtime_lookup() -> Option<impl Fn(&str) -> Option<String>> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let object = Reflect::get(&window, &JsValue::from_str("STOREFRONT_CONFIG")).ok()?;
    if !object.is_object() {
        return None;
    }

    Some(move |key: &str| {
        let value = Reflect::get(&object, &JsValue::from_str(key)).ok()?;
        value
            .as_string()
            .or_else(|| value.as_f64().map(|number| number.to_string()))
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_lookup() -> Option<fn(&str) -> Option<String>> {
    None
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_timeout(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn layer(pairs: &[(&str, &str)]) -> Layer {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Layer::from_lookup(|key| values.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert_eq!(config.log_level_filter(), LevelFilter::INFO);
    }

    #[test]
    fn blank_values_leave_config_untouched() {
        let parsed = layer(&[(API_BASE_URL, "   "), (REQUEST_TIMEOUT_MS, ""), (LOG_LEVEL, "\t")]);
        assert_eq!(parsed, Layer::default());
        assert_eq!(AppConfig::default().with(parsed), AppConfig::default());
    }

    #[test]
    fn present_values_override_and_are_trimmed() {
        let config = AppConfig::default().with(layer(&[
            (API_BASE_URL, " https://api.example.com/v2 "),
            (REQUEST_TIMEOUT_MS, "3000"),
            (LOG_LEVEL, "debug"),
        ]));

        assert_eq!(config.api_base_url, "https://api.example.com/v2");
        assert_eq!(config.request_timeout_ms, 3000);
        assert_eq!(config.log_level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn later_layers_win() {
        let config = AppConfig::default()
            .with(layer(&[(API_BASE_URL, "https://build.example"), (LOG_LEVEL, "warn")]))
            .with(layer(&[(API_BASE_URL, "https://runtime.example")]));

        assert_eq!(config.api_base_url, "https://runtime.example");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn unusable_timeouts_are_ignored() {
        for raw in ["0", "-1", "soon", "1.5"] {
            let config = AppConfig::default().with(layer(&[(REQUEST_TIMEOUT_MS, raw)]));
            assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS, "timeout {raw}");
        }
        assert_eq!(parse_timeout(" 250 "), Some(250));
    }

    #[test]
    fn log_level_names_map_to_filters() {
        let mut config = AppConfig::default();
        for (name, expected) in [
            ("error", LevelFilter::ERROR),
            ("WARN", LevelFilter::WARN),
            ("trace", LevelFilter::TRACE),
            ("off", LevelFilter::OFF),
            ("chatty", LevelFilter::INFO),
        ] {
            config.log_level = name.to_string();
            assert_eq!(config.log_level_filter(), expected, "level {name}");
        }
    }
}
