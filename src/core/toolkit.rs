use crate::core::square::square_cancellable;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use tokio_util::sync::CancellationToken;

/// Runs the delayed operations with a configured delay and a shared
/// cancellation token.
pub struct Toolkit<C: ConfigProvider> {
    config: C,
    cancel_token: CancellationToken,
}

impl<C: ConfigProvider> Toolkit<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            cancel_token: CancellationToken::new(),
        }
    }

    /// A handle that cancels this toolkit's pending work when triggered.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub async fn square(&self, n: f64) -> Result<f64> {
        let delay = self.config.square_delay();
        tracing::info!("Computing square of {} (delay {:?})", n, delay);

        let result = square_cancellable(n, delay, &self.cancel_token).await;
        match &result {
            Ok(value) => tracing::info!("Square of {} resolved to {}", n, value),
            Err(e) => tracing::warn!("Square of {} failed: {}", n, e),
        }
        result
    }

    pub fn shutdown(&self) {
        tracing::debug!("Cancelling pending toolkit work");
        self.cancel_token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LogFormat;
    use crate::utils::error::ToolkitError;
    use std::sync::Arc;
    use std::time::Duration;

    struct FixedDelay(Duration);

    impl ConfigProvider for FixedDelay {
        fn square_delay(&self) -> Duration {
            self.0
        }

        fn log_format(&self) -> LogFormat {
            LogFormat::Compact
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_square_uses_configured_delay() {
        let toolkit = Toolkit::new(FixedDelay(Duration::from_millis(250)));
        let start = tokio::time::Instant::now();
        assert_eq!(toolkit.square(6.0).await.unwrap(), 36.0);
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_in_flight_square() {
        let toolkit = Arc::new(Toolkit::new(FixedDelay(Duration::from_secs(30))));

        let worker = {
            let toolkit = Arc::clone(&toolkit);
            tokio::spawn(async move { toolkit.square(2.0).await })
        };

        tokio::time::sleep(Duration::from_secs(1)).await;
        toolkit.shutdown();

        let result = worker.await.unwrap();
        assert!(matches!(result, Err(ToolkitError::Cancelled { .. })));
        assert!(toolkit.cancellation_token().is_cancelled());
    }

    #[tokio::test]
    async fn test_negative_input_propagates() {
        let toolkit = Toolkit::new(FixedDelay(Duration::ZERO));
        assert!(matches!(
            toolkit.square(-4.0).await,
            Err(ToolkitError::InvalidInput { .. })
        ));
    }
}
