//! Shared types for the Radon try-out playground.
//!
//! This crate defines the decoded shapes of a compiler result (a generated
//! [`FileSet`] or a styled [`Diagnostic`]) and the errors raised while
//! decoding them. Every other playground crate builds on these.

mod error;
mod files;
mod output;
mod run;

pub use error::DecodeError;
pub use files::{FileSet, FILE_SUFFIX};
pub use output::Output;
pub use run::{Diagnostic, StyledRun};

/// Result type used by the decoding stages.
pub type Result<T> = std::result::Result<T, DecodeError>;
