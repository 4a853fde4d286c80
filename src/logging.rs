//! Tracing subscriber setup.
//!
//! Logs go to stderr so that plan output on stdout stays machine readable.

use anyhow::Result;
use tracing::Subscriber;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_DIRECTIVE: &str = "warn";
const VERBOSE_DIRECTIVE: &str = "fedctl=debug";

/// Pick the filter directive to use.
///
/// `--verbose` wins, then `RUST_LOG`, then the config file, then warnings only.
pub fn filter_directive(
    verbose: bool,
    env_directive: Option<&str>,
    config_directive: Option<&str>,
) -> String {
    if verbose {
        return VERBOSE_DIRECTIVE.to_string();
    }

    env_directive
        .filter(|directive| !directive.trim().is_empty())
        .or(config_directive)
        .unwrap_or(DEFAULT_DIRECTIVE)
        .to_string()
}

/// Build the filter, skipping directives that do not parse.
///
/// A bad `RUST_LOG` or `behavior.log_level` falls through to the next source
/// in precedence order instead of failing the command.
pub fn build_filter(
    verbose: bool,
    env_directive: Option<&str>,
    config_directive: Option<&str>,
) -> EnvFilter {
    let candidates = [
        filter_directive(verbose, env_directive, config_directive),
        filter_directive(verbose, None, config_directive),
    ];

    for directive in candidates {
        match EnvFilter::try_new(&directive) {
            Ok(filter) => return filter,
            Err(err) => eprintln!("Warning: ignoring log filter '{}': {}", directive, err),
        }
    }

    EnvFilter::new(DEFAULT_DIRECTIVE)
}

fn fmt_layer<S>(verbose: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
}

fn env_directive() -> Option<String> {
    std::env::var(EnvFilter::DEFAULT_ENV).ok()
}

/// Run `f` with a temporary subscriber, before the config file is known
pub fn with_bootstrap<T>(verbose: bool, f: impl FnOnce() -> T) -> T {
    let filter = build_filter(verbose, env_directive().as_deref(), None);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(verbose));

    tracing::subscriber::with_default(subscriber, f)
}

/// Install the global tracing subscriber
pub fn init(verbose: bool, config_directive: Option<&str>) -> Result<()> {
    let filter = build_filter(verbose, env_directive().as_deref(), config_directive);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(verbose));
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(filter_directive(false, None, None), "warn");
    }

    #[test]
    fn test_verbose_wins() {
        assert_eq!(
            filter_directive(true, Some("info"), Some("trace")),
            "fedctl=debug"
        );
    }

    #[test]
    fn test_env_before_config() {
        assert_eq!(filter_directive(false, Some("info"), Some("trace")), "info");
        assert_eq!(filter_directive(false, Some("  "), Some("trace")), "trace");
        assert_eq!(filter_directive(false, None, Some("trace")), "trace");
    }

    #[test]
    fn test_directives_parse() {
        for directive in [DEFAULT_DIRECTIVE, VERBOSE_DIRECTIVE] {
            assert!(EnvFilter::try_new(directive).is_ok());
        }
    }

    #[test]
    fn test_bad_env_directive_falls_back_to_config() {
        let filter = build_filter(false, Some("info,fedctl=notalevel"), Some("fedctl=trace"));
        assert_eq!(filter.to_string(), "fedctl=trace");
    }

    #[test]
    fn test_bad_env_directive_falls_back_to_default() {
        let filter = build_filter(false, Some("[{"), None);
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_bad_config_directive_falls_back_to_default() {
        let filter = build_filter(false, None, Some("fedctl=notalevel"));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_with_bootstrap_returns_value() {
        assert_eq!(with_bootstrap(false, || 42), 42);
    }
}
