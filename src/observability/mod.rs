//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! EdgeHandler produces:
//!     → logging.rs (structured log events)
//!     → metrics.rs (routing counters)
//!     → emf.rs (counters rendered as CloudWatch EMF on stdout)
//!
//! Consumers:
//!     → CloudWatch Logs in the edge region serving the request
//!     → CloudWatch Metrics, extracted from the EMF log lines
//! ```
//!
//! # Design Decisions
//! - Routing core stays silent; only the handler logs
//! - No timestamps or ANSI colours (CloudWatch adds its own)
//! - Metrics are no-ops until a recorder is installed
//! - EMF is flushed once per invocation; no background exporter

pub mod emf;
pub mod logging;
pub mod metrics;
