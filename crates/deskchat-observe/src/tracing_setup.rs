//! Subscriber setup for the `deskchat` binary.
//!
//! Log lines go to stderr so they never interleave with the transcript on
//! stdout. With `--otel`, spans are also exported through OpenTelemetry's
//! stdout exporter.
//!
//! ```no_run
//! use deskchat_observe::tracing_setup::{init_tracing, verbosity_filter};
//!
//! init_tracing(verbosity_filter(1, false), false).unwrap();
//! ```

use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Provider kept for flushing on exit; unset unless OTel is enabled.
static OTEL_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Default filter directive for a `-v` count and `--quiet`.
pub fn verbosity_filter(verbose: u8, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (0, true) => "error",
        (0, false) => "warn",
        (1, _) => "info,deskchat=debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG`, when set, takes precedence over `default_filter`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(
    default_filter: &str,
    enable_otel: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let otel = enable_otel.then(|| {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer("deskchat");

        let _ = OTEL_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);

        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(otel)
        .try_init()?;

    Ok(())
}

/// Flush buffered spans. No-op when OTel was never enabled.
pub fn shutdown_tracing() {
    let Some(provider) = OTEL_PROVIDER.get() else {
        return;
    };
    if let Err(err) = provider.shutdown() {
        eprintln!("Warning: OpenTelemetry shutdown failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filter_levels() {
        assert_eq!(verbosity_filter(0, true), "error");
        assert_eq!(verbosity_filter(0, false), "warn");
        assert_eq!(verbosity_filter(1, false), "info,deskchat=debug");
        assert_eq!(verbosity_filter(3, true), "trace");
    }

    #[test]
    fn test_shutdown_without_otel_is_noop() {
        shutdown_tracing();
    }
}
