//! Tracing subscriber setup.

use anyhow::{Context as _, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `level`; `verbose` raises the default to `debug`.
pub fn init(level: &str, verbose: bool, json: bool) -> Result<()> {
    let filter = build_env_filter(level, verbose);

    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(verbose)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")
}

fn build_env_filter(level: &str, verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { level };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},hyper=warn,reqwest=warn,rustls=warn", default))
    })
}
