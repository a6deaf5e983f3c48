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

#[cfg(not(feature = "snap"))]
macro_rules! black_box {
    ($($expr:expr),+ $(,)?) => {
        $(::std::hint::black_box($expr);)+
    };
}

#[cfg(feature = "snap")]
pub use ::insta::assert_snapshot;
#[cfg(not(feature = "snap"))]
pub(crate) use black_box as assert_snapshot;
