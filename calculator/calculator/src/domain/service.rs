//! Domain service for calculator
//!
//! Contains the core business logic for addition.

use tracing::debug;

/// Domain service that performs addition.
///
/// Stateless: every call is a pure function of its arguments, so one instance
/// can be shared by any number of concurrent requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers and return the sum, wrapping on overflow.
    #[must_use]
    pub fn add(self, a: i32, b: i32) -> i32 {
        let sum = a.wrapping_add(b);
        debug!(a, b, sum, "performing addition");
        sum
    }
}
