//! Logging setup: human-readable tracing output on stderr

use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset, by `-v` count
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. RUST_LOG wins over `verbosity`.
///
/// Output goes to stderr so the interactive transcript on stdout stays clean.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_by_verbosity() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "info");
        assert_eq!(default_filter(2), "debug");
        assert_eq!(default_filter(9), "debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}
