//! # Telemetry Features
//!
//! Console logging through `tracing-subscriber` is always on. OpenTelemetry
//! export is optional and controlled by cargo features.
//!
//! ## Feature matrix
//!
//! - `otel-traces`: Exports spans (per HTTP request and per generation call).
//! - `otel-metrics`: Exports counters for requests, rejected requests and
//!   generated identifiers, plus an identifiers-per-request histogram.
//! - `stdout`: Enables the stdout exporter for whichever signals are on.
//!
//! ## Feature constraints
//!
//! - `stdout` requires at least one of `otel-traces` or `otel-metrics`.
//!
//! ## Example usage
//!
//! ```bash
//! cargo run -p uuidgen-server --features otel-traces,otel-metrics,stdout
//! ```
//!
//! Log verbosity follows `RUST_LOG` and defaults to `info`. Audit records are
//! emitted on the `audit` target, so `RUST_LOG=info,audit=off` silences them.

// Disallow using `stdout` without `otel-traces` or `otel-metrics`
#[cfg(all(
    feature = "stdout",
    not(any(feature = "otel-traces", feature = "otel-metrics"))
))]
compile_error!(
    "The 'stdout' feature requires at least one of 'otel-traces' or 'otel-metrics' to be enabled."
);

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "otel-metrics")]
use opentelemetry::metrics::{Counter, Histogram, Meter};
#[cfg(feature = "otel-metrics")]
use opentelemetry_sdk::metrics as sdkmetrics;
#[cfg(feature = "otel-metrics")]
use std::sync::OnceLock;

#[cfg(any(feature = "otel-metrics", feature = "otel-traces"))]
use opentelemetry::{InstrumentationScope, KeyValue};
#[cfg(any(feature = "otel-metrics", feature = "otel-traces"))]
use opentelemetry_sdk::Resource;
#[cfg(any(feature = "otel-metrics", feature = "otel-traces"))]
use opentelemetry_semantic_conventions as semvcns;

#[cfg(feature = "otel-traces")]
use opentelemetry::trace::TracerProvider;
#[cfg(feature = "otel-traces")]
use opentelemetry_sdk::propagation::TraceContextPropagator;
#[cfg(feature = "otel-traces")]
use opentelemetry_sdk::trace as sdktrace;

#[cfg(any(feature = "otel-metrics", feature = "otel-traces"))]
const SERVICE_NAME: &str = "uuidgen";

pub struct TelemetryProviders {
    #[cfg(feature = "otel-traces")]
    pub tracer_provider: sdktrace::SdkTracerProvider,
    #[cfg(feature = "otel-metrics")]
    pub meter_provider: sdkmetrics::SdkMeterProvider,
}

impl TelemetryProviders {
    /// Flushes and shuts down any exporters. Errors are printed, not returned,
    /// since this runs while the process is already exiting.
    pub fn shutdown(self) {
        #[cfg(feature = "otel-traces")]
        {
            if let Err(err) = self.tracer_provider.force_flush() {
                eprintln!("Error flushing traces: {:#?}", err);
            }
            if let Err(err) = self.tracer_provider.shutdown() {
                eprintln!("Error shutting down tracer: {:#?}", err);
            }
        }

        #[cfg(feature = "otel-metrics")]
        {
            if let Err(err) = self.meter_provider.force_flush() {
                eprintln!("Error flushing metrics: {:#?}", err);
            }
            if let Err(err) = self.meter_provider.shutdown() {
                eprintln!("Error shutting down meter: {:#?}", err);
            }
        }
    }
}

pub fn init_telemetry() -> anyhow::Result<TelemetryProviders> {
    #[cfg(feature = "otel-traces")]
    opentelemetry::global::set_text_map_propagator(TraceContextPropagator::new());

    #[cfg(feature = "otel-traces")]
    let tracer_provider = init_tracer()?;

    #[cfg(feature = "otel-metrics")]
    let meter_provider = init_metrics()?;

    #[cfg(any(feature = "otel-metrics", feature = "otel-traces"))]
    let scope = InstrumentationScope::builder(SERVICE_NAME)
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_schema_url(semvcns::SCHEMA_URL)
        .build();

    // Console output is independent of the `opentelemetry_stdout` exporter.
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_thread_ids(true)
                .with_line_number(true)
                .with_target(true)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_file(true)
                .pretty(),
        );

    #[cfg(feature = "otel-traces")]
    let registry = {
        opentelemetry::global::set_tracer_provider(tracer_provider.clone());
        registry.with(
            tracing_opentelemetry::layer()
                .with_tracer(tracer_provider.tracer_with_scope(scope.clone()))
                .with_error_records_to_exceptions(true),
        )
    };

    #[cfg(feature = "otel-metrics")]
    let registry = {
        opentelemetry::global::set_meter_provider(meter_provider.clone());
        let meter = opentelemetry::global::meter_with_scope(scope);
        init_metric_handles(meter);

        registry.with(tracing_opentelemetry::MetricsLayer::new(
            meter_provider.clone(),
        ))
    };

    registry.try_init()?;

    Ok(TelemetryProviders {
        #[cfg(feature = "otel-traces")]
        tracer_provider,
        #[cfg(feature = "otel-metrics")]
        meter_provider,
    })
}

#[cfg(any(feature = "otel-metrics", feature = "otel-traces"))]
fn resource() -> Resource {
    Resource::builder()
        .with_service_name(SERVICE_NAME)
        .with_schema_url(
            [KeyValue::new(
                semvcns::resource::SERVICE_VERSION,
                env!("CARGO_PKG_VERSION"),
            )],
            semvcns::SCHEMA_URL,
        )
        .build()
}

#[cfg(feature = "otel-metrics")]
fn init_metrics() -> anyhow::Result<sdkmetrics::SdkMeterProvider> {
    let builder = sdkmetrics::SdkMeterProvider::builder().with_resource(resource());

    #[cfg(feature = "stdout")]
    let builder = {
        use opentelemetry_stdout::MetricExporter;
        let exporter = MetricExporter::default();
        let reader = opentelemetry_sdk::metrics::PeriodicReader::builder(exporter)
            .with_interval(std::time::Duration::from_secs(5))
            .build();

        builder.with_reader(reader)
    };

    Ok(builder.build())
}

#[cfg(feature = "otel-traces")]
fn init_tracer() -> anyhow::Result<sdktrace::SdkTracerProvider> {
    let builder = sdktrace::SdkTracerProvider::builder().with_resource(resource());

    #[cfg(feature = "stdout")]
    let builder = {
        use opentelemetry_stdout::SpanExporter;
        let exporter = SpanExporter::default();
        let batch = sdktrace::BatchSpanProcessor::builder(exporter)
            .with_batch_config(
                sdktrace::BatchConfigBuilder::default()
                    .with_scheduled_delay(std::time::Duration::from_secs(5))
                    .with_max_queue_size(2048)
                    .build(),
            )
            .build();
        builder.with_span_processor(batch)
    };

    Ok(builder.build())
}

#[cfg(feature = "otel-metrics")]
static REQUESTS: OnceLock<Counter<u64>> = OnceLock::new();
#[cfg(feature = "otel-metrics")]
static REJECTED_REQUESTS: OnceLock<Counter<u64>> = OnceLock::new();
#[cfg(feature = "otel-metrics")]
static IDS_GENERATED: OnceLock<Counter<u64>> = OnceLock::new();
#[cfg(feature = "otel-metrics")]
static IDS_PER_REQUEST: OnceLock<Histogram<f64>> = OnceLock::new();

#[cfg(feature = "otel-metrics")]
fn init_metric_handles(meter: Meter) {
    let _ = REQUESTS.set(
        meter
            .u64_counter("requests")
            .with_description("Total identifier generation requests")
            .build(),
    );

    let _ = REJECTED_REQUESTS.set(
        meter
            .u64_counter("rejected_requests")
            .with_description("Generation requests rejected by validation")
            .build(),
    );

    let _ = IDS_GENERATED.set(
        meter
            .u64_counter("ids_generated")
            .with_description("Total identifiers generated")
            .build(),
    );

    let _ = IDS_PER_REQUEST.set(
        meter
            .f64_histogram("ids_per_request")
            .with_description("Identifiers returned per successful request")
            .build(),
    );
}

// These compile to no-ops when metrics are disabled.
#[cfg(feature = "otel-metrics")]
pub fn increment_requests() {
    if let Some(counter) = REQUESTS.get() {
        counter.add(1, &[]);
    }
}

#[cfg(not(feature = "otel-metrics"))]
pub fn increment_requests() {}

#[cfg(feature = "otel-metrics")]
pub fn increment_rejected_requests() {
    if let Some(counter) = REJECTED_REQUESTS.get() {
        counter.add(1, &[]);
    }
}

#[cfg(not(feature = "otel-metrics"))]
pub fn increment_rejected_requests() {}

#[cfg(feature = "otel-metrics")]
pub fn increment_ids_generated(count: u64) {
    if let Some(counter) = IDS_GENERATED.get() {
        counter.add(count, &[]);
    }
}

#[cfg(not(feature = "otel-metrics"))]
pub fn increment_ids_generated(_count: u64) {}

#[cfg(feature = "otel-metrics")]
pub fn record_ids_per_request(count: f64) {
    if let Some(histogram) = IDS_PER_REQUEST.get() {
        histogram.record(count, &[]);
    }
}

#[cfg(not(feature = "otel-metrics"))]
pub fn record_ids_per_request(_count: f64) {}
