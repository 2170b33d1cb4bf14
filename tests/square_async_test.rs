use small_toolkit::{
    square_after, square_async, square_cancellable, ConfigProvider, LogFormat, Toolkit,
    ToolkitError, TomlConfig, DEFAULT_SQUARE_DELAY,
};
use std::time::Duration;
use tokio::time::Instant;
use tokio_test::{assert_pending, assert_ready_err, assert_ready_ok, task};
use tokio_util::sync::CancellationToken;

#[tokio::test(start_paused = true)]
async fn test_square_resolves_after_default_delay() {
    let start = Instant::now();

    assert_eq!(square_async(5.0).await.unwrap(), 25.0);
    assert!(start.elapsed() >= DEFAULT_SQUARE_DELAY);
}

#[tokio::test(start_paused = true)]
async fn test_square_is_pending_until_delay_elapses() {
    let mut square = task::spawn(square_after(3.0, Duration::from_millis(100)));

    assert_pending!(square.poll());

    tokio::time::advance(Duration::from_millis(50)).await;
    assert_pending!(square.poll());

    tokio::time::advance(Duration::from_millis(51)).await;
    let value = assert_ready_ok!(square.poll());
    assert_eq!(value, 9.0);
}

#[tokio::test]
async fn test_negative_input_fails_on_first_poll() {
    let mut square = task::spawn(square_async(-1.0));

    let err = assert_ready_err!(square.poll());
    match err {
        ToolkitError::InvalidInput { operation, value, .. } => {
            assert_eq!(operation, "square");
            assert_eq!(value, "-1");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_cancel_during_delay() {
    let token = CancellationToken::new();
    let mut square = task::spawn(square_cancellable(8.0, Duration::from_secs(10), &token));

    assert_pending!(square.poll());
    token.cancel();
    assert!(square.is_woken());

    let err = assert_ready_err!(square.poll());
    assert!(matches!(err, ToolkitError::Cancelled { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_toolkit_with_toml_config() {
    let config = TomlConfig::from_toml_str(
        r#"
[square]
delay_ms = 20

[logging]
format = "json"
"#,
    )
    .unwrap();
    assert_eq!(config.log_format(), LogFormat::Json);

    let toolkit = Toolkit::new(config);
    let start = Instant::now();
    assert_eq!(toolkit.square(1.5).await.unwrap(), 2.25);
    assert!(start.elapsed() >= Duration::from_millis(20));
}
