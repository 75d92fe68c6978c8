//! Diagnostics go to stderr through `tracing`, so stdout stays clean for
//! rendered output and JSON.
//!
//! `LEXICON_LOG` takes an `EnvFilter` directive (`debug`, `lexiconapp=trace`).
//! Without it the level is `warn`, or `info` with `--verbose`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "LEXICON_LOG";

pub fn init(verbose: bool) {
    let fallback = if verbose { "info" } else { "warn" };
    let env_filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time();

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
