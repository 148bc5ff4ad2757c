//! The fixed demonstration sequence.

use std::fmt;
use std::time::Duration;

use calc_transport_grpc::CallContext;
use calculator_sdk::{CalculatorClient, CalculatorError};

/// Operand pairs issued by every client run, in order.
pub const DEMO_CASES: [(i32, i32); 4] = [(5, 3), (10, 20), (100, 200), (-5, 15)];

/// One completed `Add` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculation {
    pub a: i32,
    pub b: i32,
    pub result: i32,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.a, self.b, self.result)
    }
}

/// Issue `cases` one at a time, all bounded by the same `ctx`.
///
/// `on_result` sees each success as soon as it arrives. `delay` is slept
/// between consecutive calls, not after the last one.
///
/// # Errors
/// Returns the first call error; the remaining cases are not attempted.
pub async fn run_demo<C, F>(
    client: &C,
    ctx: &CallContext,
    cases: &[(i32, i32)],
    delay: Duration,
    mut on_result: F,
) -> Result<Vec<Calculation>, CalculatorError>
where
    C: CalculatorClient + ?Sized,
    F: FnMut(&Calculation),
{
    let mut done = Vec::with_capacity(cases.len());

    for (i, &(a, b)) in cases.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        tracing::info!(test = i + 1, a, b, "calculating");
        let result = client.add(ctx, a, b).await.inspect_err(|e| {
            tracing::error!(test = i + 1, error = %e, "Add RPC failed");
        })?;

        let calculation = Calculation { a, b, result };
        on_result(&calculation);
        done.push(calculation);
    }

    Ok(done)
}
