#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;
pub mod deadline;

pub use deadline::{CallContext, MAX_TIMEOUT};

use tonic::{Request, Status};

/// Propagate the remaining deadline budget of `ctx` as the `grpc-timeout` header.
///
/// The header value is capped at [`MAX_TIMEOUT`]; the local deadline is unchanged.
///
/// # Errors
/// Returns `Status::deadline_exceeded` if the deadline has already elapsed, so the
/// call is never put on the wire.
pub fn attach_deadline<T>(request: &mut Request<T>, ctx: &CallContext) -> Result<(), Status> {
    let remaining = ctx
        .remaining()
        .ok_or_else(|| Status::deadline_exceeded("deadline elapsed before the call was issued"))?;

    request.set_timeout(remaining.min(MAX_TIMEOUT));
    Ok(())
}
