//! Tracing/logging setup shared by every embedding of the client.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging for the process.
///
/// Filter defaults to `info` and is overridable via `RUST_LOG`. Safe to
/// call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        tracing::info!("still alive after double init");
    }
}
