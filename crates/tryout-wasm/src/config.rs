//! Page configuration passed to `start_playground`.

use serde::{Deserialize, Serialize};
use tryout_editor::{DEFAULT_NAMESPACE, DEFAULT_TAB_WIDTH};
use tryout_runtime::BootstrapConfig;
use wasm_bindgen::JsValue;

use crate::error::{HostError, HostResult};

/// CSS selectors of the page elements the playground drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub namespace: String,
    pub code: String,
    pub output: String,
    pub version: String,
    /// Optional loading indicator, removed once the runtime is ready.
    pub loading: Option<String>,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            namespace: "#namespace".to_string(),
            code: "#code".to_string(),
            output: ".files".to_string(),
            version: "#version".to_string(),
            loading: Some(".loading".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub bootstrap: BootstrapConfig,
    pub selectors: Selectors,
    pub default_namespace: String,
    /// Text shown before the version number in the version element.
    pub version_prefix: String,
    pub tab_width: usize,
    pub logging: LoggingConfig,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            bootstrap: BootstrapConfig::default(),
            selectors: Selectors::default(),
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            version_prefix: "Radon v".to_string(),
            tab_width: DEFAULT_TAB_WIDTH,
            logging: LoggingConfig::default(),
        }
    }
}

impl PlaygroundConfig {
    /// Read a config object handed over from JavaScript.
    ///
    /// `undefined` and `null` mean all defaults; missing fields take their
    /// defaults.
    pub fn from_js(value: JsValue) -> HostResult<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| HostError::Config(e.to_string()))
    }

    pub fn version_label(&self, version: &str) -> String {
        format!("{}{}", self.version_prefix, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_layout() {
        let cfg = PlaygroundConfig::default();
        assert_eq!(cfg.selectors.code, "#code");
        assert_eq!(cfg.selectors.output, ".files");
        assert_eq!(cfg.selectors.loading.as_deref(), Some(".loading"));
        assert_eq!(cfg.default_namespace, "namespace");
        assert_eq!(cfg.tab_width, 4);
        assert_eq!(cfg.bootstrap.package.name, "radonmc");
    }

    #[test]
    fn test_partial_config() {
        let cfg: PlaygroundConfig = serde_json::from_str(
            r#"{"selectors":{"loading":null},"tab_width":2,"logging":{"level":"debug"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.selectors.loading, None);
        assert_eq!(cfg.selectors.namespace, "#namespace");
        assert_eq!(cfg.tab_width, 2);
        assert_eq!(cfg.logging.level, "debug");
        assert!(!cfg.logging.with_target);
    }

    #[test]
    fn test_version_label() {
        assert_eq!(PlaygroundConfig::default().version_label("2.1.3"), "Radon v2.1.3");
    }
}
