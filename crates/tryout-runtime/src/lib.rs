//! Runtime bootstrap and execution bridge for the Radon playground.
//!
//! The compiler lives inside a foreign execution engine that is loaded
//! asynchronously once per page. [`RuntimeBootstrap`] performs that load
//! exactly once, however many callers ask for it, and hands every caller
//! the same [`Ready`] handle. Only a `Ready` handle can produce an
//! [`ExecutionBridge`], so no compile can be issued before the engine is
//! installed.
//!
//! ```text
//! ensure_ready() ──► load engine ──► install package ──► read version ──► Ready
//!                                                                          │
//!                                               ExecutionBridge::run ◄─────┘
//! ```

pub mod bootstrap;
pub mod bridge;
pub mod config;
pub mod engine;
pub mod error;
pub mod poll;
pub mod session;

pub use bootstrap::{BootstrapPhase, Ready, ReadyFuture, RuntimeBootstrap};
pub use bridge::ExecutionBridge;
pub use config::{BootstrapConfig, PackageSpec};
pub use engine::{Engine, EngineLoader};
pub use error::{BootstrapError, BootstrapResult, EngineFault};
pub use poll::{wait_until, PollPolicy};
pub use session::{RuntimeSession, SessionState};
