//! Frontend version router (Lambda@Edge, origin-request).
//!
//! # Architecture Overview
//!
//! ```text
//!     CloudFront origin-request event
//!     ───────────────────────────────▶ runtime ──▶ handler ──▶ event (decode)
//!                                                      │
//!                                                      ▼
//!                                          routing (matcher + VersionSet)
//!                                                      │
//!                                                      ▼ unversioned path
//!                                          selection (uniform random)
//!                                                      │
//!     request with rewritten uri                       ▼
//!     ◀─────────────────────────────── runtime ◀── handler
//! ```
//!
//! Unversioned paths such as `/` or `/about` are prefixed with a randomly
//! chosen front-end build (`/react/`, `/vue/about`, ...). Paths that already
//! start with a known version are forwarded unchanged.
//!
//! # Deployment
//!
//! Lambda@Edge only runs the managed Node.js and Python runtimes, so this
//! binary cannot be attached to a distribution as the trigger itself. It is
//! built for the `provided.al2023` custom runtime and runs as a regional
//! Lambda that accepts the same origin-request event shape (invoked
//! directly, or from a thin Node.js/Python edge trigger that forwards the
//! event and returns the routed request). The `routing`, `selection` and
//! `event` modules do not touch the Lambda runtime and can be reused by such
//! a host unchanged.

use frontend_router::observability::logging::init_logging;
use frontend_router::observability::metrics::install_recorder;
use frontend_router::{runtime, EdgeHandler, RouterConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = match runtime::deployed_config() {
        Ok(config) => config,
        Err(e) => {
            if let Err(log_err) = init_logging(&RouterConfig::default().observability) {
                eprintln!("frontend-router: logging unavailable: {log_err}");
            }
            tracing::error!(path = ?runtime::config_path(), error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    init_logging(&config.observability)?;

    tracing::info!("frontend-router v{} starting", env!("CARGO_PKG_VERSION"));

    let recorder = if config.observability.metrics_enabled {
        let recorder = install_recorder(&config.observability.metrics_namespace)?;
        tracing::info!(namespace = recorder.namespace(), "EMF metrics recorder installed");
        Some(recorder)
    } else {
        None
    };

    let handler = EdgeHandler::new(&config)?;
    runtime::run(handler, recorder).await
}
