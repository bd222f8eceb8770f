use tracing_subscriber::EnvFilter;

/// Overrides the configured filter when set.
pub const LOG_ENV_VAR: &str = "MANDELBROT_EXPLORER_LOG";

/// Installs the global fmt subscriber, writing to stderr.
///
/// Panics if a global subscriber is already installed.
pub fn init_tracing(configured_filter: &str) {
    let filter = build_filter(std::env::var(LOG_ENV_VAR).ok().as_deref(), configured_filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}

/// Environment value first, then the configured filter, then `info`.
/// Unparseable directives fall through to the next candidate.
fn build_filter(env_value: Option<&str>, configured_filter: &str) -> EnvFilter {
    env_value
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(configured_filter).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_overrides_configured_filter() {
        assert_eq!(build_filter(Some("trace"), "warn").to_string(), "trace");
    }

    #[test]
    fn configured_filter_used_without_env() {
        assert_eq!(
            build_filter(None, "mandelbrot_explorer=debug").to_string(),
            "mandelbrot_explorer=debug"
        );
    }

    #[test]
    fn invalid_directives_fall_back() {
        assert_eq!(build_filter(Some("mandelbrot_explorer=loud"), "warn").to_string(), "warn");
        assert_eq!(build_filter(None, "mandelbrot_explorer=loud").to_string(), "info");
    }
}
