//! Absolute call deadlines shared across a sequence of RPCs.

use std::time::Duration;

use tokio::time::Instant;

/// Longest budget a context will carry (about 30 years).
///
/// Larger timeouts are clamped to this value. It stays well inside the
/// eight-digit-hours limit of the `grpc-timeout` header.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 30);

/// Invocation context carrying an absolute deadline.
///
/// The deadline is fixed when the context is built. Every call issued with the
/// same context draws from the same budget; nothing renews it per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    deadline: Instant,
}

impl CallContext {
    /// Deadline `timeout` from now, clamped to [`MAX_TIMEOUT`].
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now() + timeout.min(MAX_TIMEOUT),
        }
    }

    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self { deadline }
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Budget left before the deadline, or `None` once it has passed.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        let left = self.deadline.saturating_duration_since(Instant::now());
        (!left.is_zero()).then_some(left)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining().is_none()
    }
}
