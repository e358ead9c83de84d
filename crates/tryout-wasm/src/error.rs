//! Host-side error types.

use thiserror::Error;
use tryout_runtime::BootstrapError;
use wasm_bindgen::{JsCast, JsValue};

/// Failures of the browser host: page lookups, JS exceptions, bootstrap.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no window or document available")]
    NoDocument,

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("element {0} is not the expected kind of element")]
    WrongElementKind(String),

    #[error("invalid playground configuration: {0}")]
    Config(String),

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
}

impl HostError {
    pub fn js(value: JsValue) -> Self {
        HostError::Js(js_error_message(&value))
    }
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort message for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub type HostResult<T> = Result<T, HostError>;
