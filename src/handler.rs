//! Edge request handler.
//!
//! # Responsibilities
//! - Decode the CloudFront event into a typed request
//! - Run the version router and write back the new uri
//! - Log and count each decision
//!
//! # Design Decisions
//! - Built once at cold start and shared read-only across invocations
//! - On error the request is not modified; the error goes to the host

use serde_json::Value;

use crate::config::loader::ConfigError;
use crate::config::validation::validate_config;
use crate::config::RouterConfig;
use crate::error::RouterResult;
use crate::event::{CloudFrontEvent, RequestDescriptor};
use crate::observability::metrics;
use crate::routing::{RouteDecision, VersionRouter};
use crate::selection::{self, VersionSelector};

/// Origin-request handler that pins unversioned paths to a random version.
#[derive(Debug)]
pub struct EdgeHandler {
    router: VersionRouter,
    selector: Box<dyn VersionSelector>,
    metrics_enabled: bool,
}

impl EdgeHandler {
    /// Validate the configuration and build the router and selector.
    pub fn new(config: &RouterConfig) -> RouterResult<Self> {
        validate_config(config).map_err(ConfigError::Validation)?;

        let router = VersionRouter::from_config(&config.routing)?;
        let selector = selection::from_config(&config.selection);

        tracing::info!(
            versions = router.versions().len(),
            index_document = ?config.routing.index_document,
            seeded = config.selection.seed.is_some(),
            "Edge handler initialized"
        );

        Ok(Self {
            router,
            selector,
            metrics_enabled: config.observability.metrics_enabled,
        })
    }

    /// Assemble a handler from parts, bypassing configuration.
    pub fn with_selector(router: VersionRouter, selector: Box<dyn VersionSelector>) -> Self {
        Self {
            router,
            selector,
            metrics_enabled: false,
        }
    }

    pub fn router(&self) -> &VersionRouter {
        &self.router
    }

    /// Route a bare uri with this handler's selector, without logging.
    pub fn decide(&self, uri: &str) -> RouterResult<RouteDecision> {
        self.router.route(uri, self.selector.as_ref())
    }

    /// Handle a raw Lambda payload.
    pub fn handle(&self, event: Value) -> RouterResult<RequestDescriptor> {
        CloudFrontEvent::from_value(event)
            .and_then(|event| self.handle_event(event))
            .inspect_err(|e| self.on_error(e))
    }

    /// Handle an already-decoded event.
    pub fn handle_event(&self, event: CloudFrontEvent) -> RouterResult<RequestDescriptor> {
        let distribution = event.distribution_id().map(str::to_owned);
        let span = tracing::debug_span!("origin_request", distribution = distribution.as_deref());
        let _enter = span.enter();

        let request = event.into_request()?;
        self.route_request(request)
    }

    /// Route a single request descriptor, replacing its uri.
    pub fn route_request(&self, mut request: RequestDescriptor) -> RouterResult<RequestDescriptor> {
        request.validate()?;

        let decision = self.decide(&request.uri)?;
        self.on_decision(&request.uri, &decision);

        request.uri = decision.into_uri();
        Ok(request)
    }

    fn on_decision(&self, original: &str, decision: &RouteDecision) {
        if decision.is_rewrite() {
            tracing::debug!(
                uri = %original,
                version = %decision.version(),
                rewritten = %decision.uri(),
                "Assigned random version"
            );
        } else {
            tracing::debug!(
                uri = %original,
                version = %decision.version(),
                routed = %decision.uri(),
                "Request already targets a version"
            );
        }
        if self.metrics_enabled {
            metrics::record_decision(decision);
        }
    }

    fn on_error(&self, error: &crate::error::RouterError) {
        tracing::warn!(error = %error, kind = error.kind(), "Rejecting CloudFront event");
        if self.metrics_enabled {
            metrics::record_error(error.kind());
        }
    }
}
