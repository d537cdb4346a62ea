//! Non-critical side effects.

use std::{error::Error, future::Future};

use tracing::warn;

/// Run a side effect whose failure must not fail the surrounding operation.
///
/// The future is awaited to completion. An error is logged as a warning
/// tagged with `operation` and then dropped; the caller only learns whether
/// the side effect succeeded.
pub async fn best_effort<F, E>(operation: &'static str, side_effect: F) -> bool
where
    F: Future<Output = Result<(), E>>,
    E: Error,
{
    match side_effect.await {
        Ok(()) => true,
        Err(error) => {
            warn!(operation, error = %error, "side effect failed");

            false
        }
    }
}
