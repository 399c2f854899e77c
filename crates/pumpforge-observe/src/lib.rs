//! Observability setup for pumpforge: tracing subscriber and optional
//! OpenTelemetry export.

pub mod tracing_setup;
