//! Pyodide as the execution engine.
//!
//! The page loads `pyodide.js`, which defines `loadPyodide`. The loader
//! adopts an engine left on `globalThis.pyodide` by an earlier mount,
//! installs the compiler package with `micropip`, and compiles one Python
//! entry point that every later compile calls directly.

use std::cell::OnceCell;

use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use tryout_runtime::{BootstrapError, BootstrapResult, Engine, EngineFault, EngineLoader, PackageSpec};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::error::js_error_message;

/// Global name the engine is published under.
const GLOBAL_HANDLE: &str = "pyodide";

/// Package installer shipped with Pyodide.
const INSTALLER: &str = "micropip";

/// Compiler entry point: `main(namespace, code) -> str`.
///
/// Returns the JSON object of generated files, or the formatted error text
/// when the compiler rejects the code. Anything else raised escapes as a
/// fault.
const ENTRY_POINT: &str = r#"import json
from radon.dp_ast import parse_str
from radon.transpiler import Transpiler
from radon.utils import reset_expr_id

try:
    from radon.error import RadonError
except ImportError:
    RadonError = SyntaxError

def main(namespace, code):
    try:
        reset_expr_id()
        (statements, macros) = parse_str(code)
        transpiler = Transpiler(statements, macros, pack_namespace=namespace)

        files = {}
        for filename in transpiler.files:
            files[filename] = "\n".join(transpiler.files[filename])

        return json.dumps(files)
    except (SyntaxError, RadonError) as e:
        return str(e)

main"#;

const VERSION_QUERY: &str = "from radon.utils import VERSION_RADON\nVERSION_RADON";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = loadPyodide, catch)]
    fn load_pyodide() -> Result<Promise, JsValue>;

    /// A Pyodide instance.
    #[derive(Debug, Clone)]
    pub type Pyodide;

    #[wasm_bindgen(method, catch, js_name = runPython)]
    fn run_python(this: &Pyodide, code: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = loadPackage)]
    fn load_package(this: &Pyodide, name: &str) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn pyimport(this: &Pyodide, name: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, getter, js_name = loadedPackages)]
    fn loaded_packages(this: &Pyodide) -> JsValue;
}

impl Pyodide {
    fn has_package(&self, name: &str) -> bool {
        let loaded = self.loaded_packages();
        loaded.is_object() && Reflect::has(&loaded, &JsValue::from_str(name)).unwrap_or(false)
    }
}

#[derive(Serialize)]
struct InstallOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<NoCacheHeaders>,
}

#[derive(Serialize)]
struct NoCacheHeaders {
    pragma: &'static str,
    #[serde(rename = "cache-control")]
    cache_control: &'static str,
}

impl InstallOptions {
    fn for_package(package: &PackageSpec) -> Self {
        Self {
            headers: package.no_cache.then_some(NoCacheHeaders {
                pragma: "no-cache",
                cache_control: "no-cache",
            }),
        }
    }
}

/// Pyodide with the compiler entry point bound.
pub struct PyodideEngine {
    pyodide: Pyodide,
    entry: OnceCell<Function>,
}

impl PyodideEngine {
    fn bind_entry_point(&self) -> Result<(), JsValue> {
        if self.entry.get().is_none() {
            let entry = self.pyodide.run_python(ENTRY_POINT)?;
            let _ = self.entry.set(entry.unchecked_into());
        }
        Ok(())
    }
}

impl Engine for PyodideEngine {
    fn run(&self, namespace: &str, source: &str) -> Result<String, EngineFault> {
        let entry = self
            .entry
            .get()
            .ok_or_else(|| EngineFault::new("compiler entry point is not bound"))?;
        let result = entry
            .call2(
                &JsValue::NULL,
                &JsValue::from_str(namespace),
                &JsValue::from_str(source),
            )
            .map_err(|e| EngineFault::new(js_error_message(&e)))?;
        result
            .as_string()
            .ok_or_else(|| EngineFault::new("compiler returned a non-string result"))
    }
}

/// Loads Pyodide and the compiler package.
#[derive(Debug, Default)]
pub struct PyodideLoader;

fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[async_trait(?Send)]
impl EngineLoader for PyodideLoader {
    type Engine = PyodideEngine;

    async fn load_engine(&self) -> BootstrapResult<PyodideEngine> {
        let global = js_sys::global();
        let handle = JsValue::from_str(GLOBAL_HANDLE);
        let existing = Reflect::get(&global, &handle).unwrap_or(JsValue::UNDEFINED);

        let pyodide: Pyodide = if existing.is_undefined() || existing.is_null() {
            let started = now_ms();
            let load = |e: JsValue| BootstrapError::EngineLoad(js_error_message(&e));
            let promise = load_pyodide().map_err(load)?;
            let instance = JsFuture::from(promise).await.map_err(load)?;
            Reflect::set(&global, &handle, &instance).map_err(load)?;
            tracing::info!(elapsed_ms = now_ms() - started, "loaded pyodide");
            instance.unchecked_into()
        } else {
            tracing::info!("reusing pyodide already on the page");
            existing.unchecked_into()
        };

        Ok(PyodideEngine {
            pyodide,
            entry: OnceCell::new(),
        })
    }

    async fn install_package(
        &self,
        engine: &PyodideEngine,
        package: &PackageSpec,
    ) -> BootstrapResult<()> {
        let failed = |e: JsValue| BootstrapError::PackageInstall {
            package: package.name.clone(),
            message: js_error_message(&e),
        };
        let pyodide = &engine.pyodide;

        if pyodide.has_package(&package.name) {
            tracing::info!(package = %package.name, "package already installed");
        } else {
            let started = now_ms();
            if !pyodide.has_package(INSTALLER) {
                JsFuture::from(pyodide.load_package(INSTALLER).map_err(failed)?)
                    .await
                    .map_err(failed)?;
            }

            let micropip = pyodide.pyimport(INSTALLER).map_err(failed)?;
            let install: Function = Reflect::get(&micropip, &JsValue::from_str("install"))
                .map_err(failed)?
                .unchecked_into();
            let options = serde_wasm_bindgen::to_value(&InstallOptions::for_package(package))
                .map_err(|e| failed(JsValue::from_str(&e.to_string())))?;
            let pending = install
                .call2(&micropip, &JsValue::from_str(&package.name), &options)
                .map_err(failed)?;
            JsFuture::from(Promise::resolve(&pending))
                .await
                .map_err(failed)?;
            tracing::info!(package = %package.name, elapsed_ms = now_ms() - started, "installed package");
        }

        engine.bind_entry_point().map_err(failed)
    }

    fn package_version(
        &self,
        engine: &PyodideEngine,
        package: &PackageSpec,
    ) -> BootstrapResult<String> {
        let failed = |message: String| BootstrapError::Version {
            package: package.name.clone(),
            message,
        };
        engine
            .pyodide
            .run_python(VERSION_QUERY)
            .map_err(|e| failed(js_error_message(&e)))?
            .as_string()
            .ok_or_else(|| failed("VERSION_RADON is not a string".to_string()))
    }
}
