//! Runtime error types.

use thiserror::Error;

/// Fatal failures of the one-time bootstrap.
///
/// `Clone` so the single in-flight load can hand the same failure to every
/// caller waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    /// The execution engine itself could not be loaded.
    #[error("failed to load execution engine: {0}")]
    EngineLoad(String),

    /// The engine loaded but the package install failed.
    #[error("failed to install package '{package}': {message}")]
    PackageInstall { package: String, message: String },

    /// The installed package did not report a version.
    #[error("failed to read version of package '{package}': {message}")]
    Version { package: String, message: String },

    /// A readiness marker did not appear within the polling budget.
    #[error("timed out after {waited_ms} ms waiting for {what}")]
    Timeout { what: String, waited_ms: u64 },
}

/// An unhandled failure inside the execution engine during a compile.
///
/// Compile errors in user code are not faults; the engine reports those as
/// diagnostic text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("execution engine fault: {message}")]
pub struct EngineFault {
    pub message: String,
}

impl EngineFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result alias for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;
