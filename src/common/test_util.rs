pub fn setup_test() {
    use std::sync::Once;
    use tracing::Level;
    static LOGGING: Once = Once::new();
    LOGGING.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_test_writer()
            .init();
    })
}

/// Runs `op` twice, checks both runs agree and hands back the result.
pub fn twice<T: PartialEq + std::fmt::Debug>(op: impl Fn() -> T) -> T {
    let first = op();
    let second = op();
    assert_eq!(first, second, "operation is not idempotent");
    first
}
