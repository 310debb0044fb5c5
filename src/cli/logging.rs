//! Log filter selection for the binary

use tracing_subscriber::EnvFilter;

/// Level used when neither `--verbose` nor `RUST_LOG` says otherwise
const DEFAULT_DIRECTIVE: &str = "info";

/// Build the log filter.
///
/// `--verbose` forces DEBUG. Otherwise a non-empty, parseable `RUST_LOG`
/// value is used as given, and INFO applies when it is unset or invalid.
pub fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }

    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
