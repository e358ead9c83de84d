//! Bounded polling for readiness markers owned by someone else.
//!
//! Intervals start at `initial_interval_ms` and double up to
//! `max_interval_ms`. Polling gives up once the summed sleep reaches
//! `max_wait_ms`.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BootstrapError, BootstrapResult};

/// Backoff schedule for [`wait_until`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollPolicy {
    pub initial_interval_ms: u64,
    pub max_interval_ms: u64,
    pub max_wait_ms: u64,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_interval_ms: 100,
            max_interval_ms: 1_600,
            max_wait_ms: 30_000,
        }
    }
}

impl PollPolicy {
    /// The sleep durations between probes, in order.
    ///
    /// The last interval is shortened so the total equals `max_wait_ms`.
    pub fn intervals(&self) -> Intervals {
        Intervals {
            next_ms: self.initial_interval_ms.max(1),
            max_ms: self.max_interval_ms.max(1),
            remaining_ms: self.max_wait_ms,
        }
    }
}

/// Iterator returned by [`PollPolicy::intervals`].
#[derive(Debug, Clone)]
pub struct Intervals {
    next_ms: u64,
    max_ms: u64,
    remaining_ms: u64,
}

impl Iterator for Intervals {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        if self.remaining_ms == 0 {
            return None;
        }
        let step = self.next_ms.min(self.max_ms).min(self.remaining_ms);
        self.remaining_ms -= step;
        self.next_ms = self.next_ms.saturating_mul(2).min(self.max_ms);
        Some(Duration::from_millis(step))
    }
}

/// Probe until `probe` returns `true`, sleeping between attempts.
///
/// The probe runs once up front, so an already-present marker costs no
/// sleep. `sleep` is supplied by the host (a timer in the browser).
pub async fn wait_until<P, S, F>(
    what: &str,
    policy: &PollPolicy,
    mut probe: P,
    mut sleep: S,
) -> BootstrapResult<()>
where
    P: FnMut() -> bool,
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
{
    if probe() {
        return Ok(());
    }

    let mut waited_ms = 0u64;
    for interval in policy.intervals() {
        sleep(interval).await;
        waited_ms += interval.as_millis() as u64;
        if probe() {
            tracing::debug!(what, waited_ms, "readiness marker appeared");
            return Ok(());
        }
    }

    tracing::warn!(what, waited_ms, "gave up waiting for readiness marker");
    Err(BootstrapError::Timeout {
        what: what.to_string(),
        waited_ms,
    })
}
