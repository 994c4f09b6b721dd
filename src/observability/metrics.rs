//! Routing metrics.
//!
//! # Metrics
//! - `router_requests_total` (counter): every handled request
//! - `router_rewrites_total` (counter): unversioned paths, by chosen version
//! - `router_passthrough_total` (counter): already-versioned paths, by version
//! - `router_errors_total` (counter): rejected events, by error kind
//!
//! Counters go to whichever recorder is installed. The Lambda binary installs
//! an [`EmfRecorder`] when `observability.metrics_enabled` is set.

use metrics::counter;
use thiserror::Error;

use crate::observability::emf::EmfRecorder;
use crate::routing::RouteDecision;

pub const REQUESTS_TOTAL: &str = "router_requests_total";
pub const REWRITES_TOTAL: &str = "router_rewrites_total";
pub const PASSTHROUGH_TOTAL: &str = "router_passthrough_total";
pub const ERRORS_TOTAL: &str = "router_errors_total";

/// A global recorder was already set for this process.
#[derive(Debug, Error)]
#[error("a global metrics recorder is already installed")]
pub struct RecorderInstallError;

/// Install an EMF recorder as the process-wide recorder.
///
/// The returned handle shares counters with the installed one; call
/// [`EmfRecorder::flush`] on it after each invocation.
pub fn install_recorder(namespace: &str) -> Result<EmfRecorder, RecorderInstallError> {
    let recorder = EmfRecorder::new(namespace);
    metrics::set_global_recorder(recorder.clone()).map_err(|_| RecorderInstallError)?;
    Ok(recorder)
}

/// Count a successful routing decision.
pub fn record_decision(decision: &RouteDecision) {
    counter!(REQUESTS_TOTAL).increment(1);
    let version = decision.version().name().to_string();
    if decision.is_rewrite() {
        counter!(REWRITES_TOTAL, "version" => version).increment(1);
    } else {
        counter!(PASSTHROUGH_TOTAL, "version" => version).increment(1);
    }
}

/// Count a rejected event.
pub fn record_error(kind: &'static str) {
    counter!(REQUESTS_TOTAL).increment(1);
    counter!(ERRORS_TOTAL, "kind" => kind).increment(1);
}
