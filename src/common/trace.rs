// debugging
#[cfg(not(feature = "verbose_coercion"))]
pub use crate::noop as trace;
#[cfg(feature = "verbose_coercion")]
pub use tracing::trace;
