//! Structured logging setup for the `warsim` binary.
//!
//! The engine emits `tracing` events (turns at debug, game results at info,
//! turn-cap settlements at warn). Output goes to stderr so it never mixes
//! with command output on stdout.

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// Defaults to `warn` when `RUST_LOG` is unset or invalid. Calling it twice
/// is harmless; the second call leaves the first subscriber in place.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
