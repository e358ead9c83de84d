//! The seams to the foreign execution engine.

use async_trait::async_trait;

use crate::config::PackageSpec;
use crate::error::{BootstrapResult, EngineFault};

/// A loaded engine with the compiler package installed.
///
/// `run` blocks until the compile finishes. Compile errors in user code come
/// back as `Ok` diagnostic text; `Err` is reserved for faults inside the
/// engine itself.
pub trait Engine {
    fn run(&self, namespace: &str, source: &str) -> Result<String, EngineFault>;
}

/// Knows how to bring an [`Engine`] up.
///
/// Called at most once per page by [`RuntimeBootstrap`](crate::RuntimeBootstrap).
/// Futures are not `Send`: the host runs a single-threaded event loop.
#[async_trait(?Send)]
pub trait EngineLoader {
    type Engine: Engine + 'static;

    /// Load (or adopt an already-loaded) engine.
    async fn load_engine(&self) -> BootstrapResult<Self::Engine>;

    /// Install the compiler package into the engine. Skipping an install
    /// that is already present is up to the implementation.
    async fn install_package(
        &self,
        engine: &Self::Engine,
        package: &PackageSpec,
    ) -> BootstrapResult<()>;

    /// Read the installed package's version string.
    fn package_version(&self, engine: &Self::Engine, package: &PackageSpec)
        -> BootstrapResult<String>;
}
