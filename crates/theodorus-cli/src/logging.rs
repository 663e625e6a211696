//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter, widened by `--verbose` and replaced by `RUST_LOG`.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "theodorus=debug,theodorus_svg=debug,theodorus_extract=debug"
    } else {
        "theodorus=info,theodorus_svg=warn,theodorus_extract=warn"
    }
}

/// Install the global subscriber, logging to stderr so stdout stays clean
/// for rendered output.
pub fn init(verbose: bool) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
