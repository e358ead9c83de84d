//! Bootstrap configuration.

use serde::{Deserialize, Serialize};

use crate::poll::PollPolicy;

/// The versioned compiler package installed into the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageSpec {
    /// Distribution name passed to the package installer.
    pub name: String,
    /// Ask the installer to bypass HTTP caches so the newest release is used.
    pub no_cache: bool,
}

impl Default for PackageSpec {
    fn default() -> Self {
        Self {
            name: "radonmc".to_string(),
            no_cache: true,
        }
    }
}

/// Settings for [`RuntimeBootstrap`](crate::RuntimeBootstrap) and readiness polling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    pub package: PackageSpec,
    pub poll: PollPolicy,
}
