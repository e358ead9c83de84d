//! The blocking call into the engine's compiler entry point.

use std::rc::Rc;

use crate::engine::Engine;
use crate::error::EngineFault;

/// Handle for issuing compiles against a ready engine.
///
/// Obtainable only through [`Ready::bridge`](crate::Ready::bridge).
pub struct ExecutionBridge<E> {
    engine: Rc<E>,
}

impl<E> ExecutionBridge<E> {
    pub(crate) fn new(engine: Rc<E>) -> Self {
        Self { engine }
    }
}

impl<E: Engine> ExecutionBridge<E> {
    /// Compile `source` under `namespace`, returning the raw result verbatim.
    ///
    /// Faults are passed through untouched.
    pub fn run(&self, namespace: &str, source: &str) -> Result<String, EngineFault> {
        tracing::debug!(namespace, source_len = source.len(), "compile request");
        let raw = self.engine.run(namespace, source)?;
        tracing::debug!(raw_len = raw.len(), "compile finished");
        Ok(raw)
    }
}

impl<E> Clone for ExecutionBridge<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Rc::clone(&self.engine),
        }
    }
}
