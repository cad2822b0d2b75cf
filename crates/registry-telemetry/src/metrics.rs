//! Prometheus metrics for the registry.
//!
//! All metrics follow the naming convention: `dr_<area>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    linear_buckets, Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // LEDGER
    // =========================================================================

    /// Submission records committed
    pub static ref SUBMISSIONS_RECORDED: Counter = Counter::new(
        "dr_submissions_recorded_total",
        "Total number of submission records committed"
    ).expect("metric creation failed");

    /// Rejected write calls
    pub static ref SUBMISSIONS_REJECTED: CounterVec = CounterVec::new(
        Opts::new("dr_submissions_rejected_total", "Rejected submission calls"),
        &["reason"]  // duplicate/empty_cid/invalid_signature/storage
    ).expect("metric creation failed");

    /// Extension edges appended
    pub static ref EXTENSIONS_DECLARED: Counter = Counter::new(
        "dr_extensions_declared_total",
        "Total number of extension edges declared"
    ).expect("metric creation failed");

    // =========================================================================
    // SIGNATURES
    // =========================================================================

    pub static ref SIGNATURE_CHECKS: CounterVec = CounterVec::new(
        Opts::new("dr_signature_checks_total", "Delegated signature checks"),
        &["result"]  // valid/invalid
    ).expect("metric creation failed");

    // =========================================================================
    // RESOLUTION
    // =========================================================================

    /// Hops from the queried address to the address that answered
    pub static ref RESOLUTION_HOPS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "dr_resolution_hops",
            "Extension hops taken by successful resolutions"
        ).buckets(linear_buckets(0.0, 1.0, 9).expect("bucket layout"))
    ).expect("metric creation failed");

    pub static ref RESOLUTIONS: CounterVec = CounterVec::new(
        Opts::new("dr_resolutions_total", "Resolution calls by outcome"),
        &["outcome"]  // direct/inherited/miss/too_deep
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry. Safe to call repeatedly.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(SUBMISSIONS_RECORDED.clone()),
        Box::new(SUBMISSIONS_REJECTED.clone()),
        Box::new(EXTENSIONS_DECLARED.clone()),
        Box::new(SIGNATURE_CHECKS.clone()),
        Box::new(RESOLUTION_HOPS.clone()),
        Box::new(RESOLUTIONS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
