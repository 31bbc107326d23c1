//! Tracing subscriber setup for binaries and examples embedding the engine.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `directive` is a standard env-filter directive (e.g. "info" or
/// "sereine=debug"); `RUST_LOG` takes precedence when set. Calling this
/// twice is a no-op rather than a panic, so tests can install it freely.
pub fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive.to_string()));

    let _ = fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_tracing("info");
        init_tracing("debug");
    }
}
