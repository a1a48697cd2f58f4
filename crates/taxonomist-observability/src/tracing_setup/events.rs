//! Structured log events for the submission lifecycle.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// A submission passed the single-flight gate.
pub fn submission_started(submission_id: &str) {
    tracing::info!(
        event = "submission_started",
        submission_id = %submission_id,
        "submission started"
    );
}

/// Input failed a validation rule; nothing was sent.
pub fn validation_failed(submission_id: &str, field: &str, reason: &str) {
    tracing::info!(
        event = "validation_failed",
        submission_id = %submission_id,
        field = %field,
        reason = %reason,
        "validation failed"
    );
}

/// The service returned an estimate.
pub fn prediction_received(submission_id: &str, gdp: f64, source: &str, elapsed_ms: u64) {
    tracing::info!(
        event = "prediction_received",
        submission_id = %submission_id,
        gdp = gdp,
        source = %source,
        elapsed_ms = elapsed_ms,
        "prediction received"
    );
}

/// The request or the service failed.
pub fn prediction_failed(submission_id: &str, error: &str, elapsed_ms: u64) {
    tracing::warn!(
        event = "prediction_failed",
        submission_id = %submission_id,
        error = %error,
        elapsed_ms = elapsed_ms,
        "prediction failed"
    );
}

/// A second submission arrived while one was in flight.
pub fn submission_rejected() {
    tracing::warn!(
        event = "submission_rejected",
        "submission rejected: another is in flight"
    );
}
