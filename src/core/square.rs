use crate::utils::error::{Result, ToolkitError};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const DEFAULT_SQUARE_DELAY: Duration = Duration::from_millis(1000);

const OPERATION: &str = "square";

fn check_input(n: f64) -> Result<()> {
    // NaN 也走這裡：它不是非負數
    if !(n >= 0.0) {
        return Err(ToolkitError::invalid_input(
            OPERATION,
            n,
            "input must be a non-negative number",
        ));
    }
    Ok(())
}

/// Squares `n` after [`DEFAULT_SQUARE_DELAY`].
pub async fn square_async(n: f64) -> Result<f64> {
    square_after(n, DEFAULT_SQUARE_DELAY).await
}

/// Waits `delay`, then resolves with `n * n`.
///
/// Negative input is rejected on the first poll, before the timer is created.
/// The only way to stop the wait is to drop the future; see
/// [`square_cancellable`] for an explicit cancellation point.
pub async fn square_after(n: f64, delay: Duration) -> Result<f64> {
    check_input(n)?;
    tracing::debug!("Squaring {} after {:?}", n, delay);
    tokio::time::sleep(delay).await;
    Ok(n * n)
}

/// Like [`square_after`], but resolves with [`ToolkitError::Cancelled`] once
/// `cancel_token` fires during the delay.
pub async fn square_cancellable(
    n: f64,
    delay: Duration,
    cancel_token: &CancellationToken,
) -> Result<f64> {
    check_input(n)?;
    tracing::debug!("Squaring {} after {:?} (cancellable)", n, delay);

    tokio::select! {
        _ = cancel_token.cancelled() => {
            tracing::info!("Square of {} cancelled before the delay elapsed", n);
            Err(ToolkitError::Cancelled {
                operation: OPERATION.to_string(),
            })
        }
        _ = tokio::time::sleep(delay) => Ok(n * n),
    }
}
