//! Lifecycle state of the page's single runtime session.

use std::fmt;

/// Where the session is in its one-way lifecycle.
///
/// `Ready` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

impl SessionState {
    fn can_advance_to(self, next: SessionState) -> bool {
        matches!(
            (self, next),
            (SessionState::Uninitialized, SessionState::Loading)
                | (SessionState::Loading, SessionState::Ready)
                | (SessionState::Loading, SessionState::Failed)
        )
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// State plus the package version, which exists only once `Ready`.
#[derive(Debug, Clone)]
pub struct RuntimeSession {
    state: SessionState,
    version: Option<String>,
}

impl RuntimeSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Uninitialized,
            version: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The installed package version. `None` until `Ready`.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Move `Uninitialized → Loading`. Returns `false` if already past it.
    pub fn begin_loading(&mut self) -> bool {
        self.advance(SessionState::Loading)
    }

    /// Move `Loading → Ready`, recording the version.
    pub fn mark_ready(&mut self, version: impl Into<String>) -> bool {
        let moved = self.advance(SessionState::Ready);
        if moved {
            self.version = Some(version.into());
        }
        moved
    }

    /// Move `Loading → Failed`.
    pub fn mark_failed(&mut self) -> bool {
        self.advance(SessionState::Failed)
    }

    fn advance(&mut self, next: SessionState) -> bool {
        if !self.state.can_advance_to(next) {
            tracing::debug!(from = %self.state, to = %next, "ignored session transition");
            return false;
        }
        tracing::debug!(from = %self.state, to = %next, "session transition");
        self.state = next;
        true
    }
}

impl Default for RuntimeSession {
    fn default() -> Self {
        Self::new()
    }
}
