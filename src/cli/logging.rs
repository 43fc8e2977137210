//! Log filter for the binary

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, or WARN (DEBUG with `--verbose`) when it is unset
pub fn log_filter(verbose: bool) -> EnvFilter {
    filter_from(std::env::var("RUST_LOG").ok().as_deref(), verbose)
}

/// An unset, empty or unparsable directive string falls back to the
/// verbosity flag
pub(crate) fn filter_from(directives: Option<&str>, verbose: bool) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| {
            let level = if verbose {
                LevelFilter::DEBUG
            } else {
                LevelFilter::WARN
            };
            EnvFilter::default().add_directive(level.into())
        })
}
