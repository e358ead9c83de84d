use thiserror::Error;
use tryout_runtime::EngineFault;
use tryout_types::DecodeError;

/// Failures of a recompute. Neither is a user mistake: compile errors in
/// user code are rendered, not raised.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error(transparent)]
    Engine(#[from] EngineFault),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type PlaygroundResult<T> = Result<T, PlaygroundError>;
