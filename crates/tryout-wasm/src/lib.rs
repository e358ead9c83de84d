//! Radon try-out playground as a WASM module for the documentation site.
//!
//! This crate exposes the playground via `wasm-bindgen`. The page loads
//! `pyodide.js` first, then this module, then calls `start_playground`.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { start_playground } from 'tryout-wasm';
//!
//! await init();
//! await start_playground({ selectors: { loading: null } });
//! ```

pub mod app;
pub mod config;
pub mod dom;
pub mod engine;
pub mod error;
pub mod logging;
pub mod timer;

use wasm_bindgen::prelude::*;

pub use config::PlaygroundConfig;
pub use error::HostError;

/// Load the runtime and wire the playground fields on the current page.
///
/// `config` is an optional object overriding [`PlaygroundConfig`] fields.
/// Resolves once the fields are live; rejects if the runtime cannot be
/// loaded or the page lacks an expected element.
#[wasm_bindgen]
pub async fn start_playground(config: JsValue) -> Result<(), JsValue> {
    let config = PlaygroundConfig::from_js(config)?;
    logging::init(&config.logging);

    app::start(config).await.map_err(|err| {
        tracing::error!(error = %err, "playground failed to start");
        JsValue::from(err)
    })
}

/// Decode a raw compiler result without touching the page.
///
/// Returns a JSON string: `{"kind":"files","value":{...}}`,
/// `{"kind":"diagnostic","value":[...]}`, or `{"kind":"error","value":"..."}`
/// for a malformed file set.
#[wasm_bindgen]
pub fn decode_output(raw: &str) -> String {
    let encoded = match tryout_decoder::classify(raw) {
        Ok(output) => serde_json::to_string(&output),
        Err(err) => serde_json::to_string(&serde_json::json!({
            "kind": "error",
            "value": err.to_string(),
        })),
    };
    encoded.unwrap_or_else(|e| {
        format!(
            r#"{{"kind":"error","value":"Serialization error: {}"}}"#,
            e
        )
    })
}

/// Return the playground version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
