//! Logging for the `pumpforge` binary.
//!
//! One generation run emits a handful of events: config resolution, the
//! `gen_ai.complete` span around the provider call, assembly warnings and
//! the final error if any. They are written to stderr; stdout belongs to the
//! token report (styled or `--json`).
//!
//! `--otel` adds the same spans to stdout through the OpenTelemetry stdout
//! exporter, for inspecting span attributes while developing.
//!
//! ```no_run
//! use pumpforge_observe::tracing_setup::{init_tracing, shutdown_tracing};
//!
//! init_tracing("warn", false).unwrap();
//! // ... run ...
//! shutdown_tracing();
//! ```

use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const TRACER_NAME: &str = "pumpforge";

/// Set only when `--otel` was requested; flushed by [`shutdown_tracing`].
static OTEL_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// `RUST_LOG` when it parses, otherwise the filter derived from `-q` / `-v`.
pub fn env_filter(verbosity_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity_filter))
}

/// Install the global subscriber for this process.
///
/// Events go to stderr without targets; closing spans report their timing
/// so the provider call duration shows up at `-v`.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(
    verbosity_filter: &str,
    enable_otel: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE);

    let otel_layer = enable_otel.then(|| {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer(TRACER_NAME);
        let _ = OTEL_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry()
        .with(env_filter(verbosity_filter))
        .with(stderr_layer)
        .with(otel_layer)
        .try_init()?;

    Ok(())
}

/// Flush exported spans before the process exits. Does nothing without `--otel`.
pub fn shutdown_tracing() {
    if let Some(provider) = OTEL_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: failed to flush OpenTelemetry spans: {e}");
        }
    }
}
