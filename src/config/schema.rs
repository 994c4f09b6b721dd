//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

/// Version tags served by the default deployment, in selection order.
pub const DEFAULT_VERSIONS: [&str; 12] = [
    "/lit",
    "/qwik",
    "/react",
    "/solid",
    "/svelte",
    "/vanilla",
    "/vue",
    "/preact",
    "/next",
    "/angular",
    "/blazor",
    "/leptos",
];

/// Root configuration for the edge router.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RouterConfig {
    /// Version tags and path rewriting options.
    pub routing: RoutingConfig,

    /// How a version is drawn for unversioned paths.
    pub selection: SelectionConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Routing configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RoutingConfig {
    /// Known version prefixes (e.g. "/react").
    pub versions: Vec<String>,

    /// Document appended to bare version roots ("/react" or "/react/").
    /// Unset by default, in which case roots are left as they are.
    pub index_document: Option<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            versions: DEFAULT_VERSIONS.iter().map(|v| v.to_string()).collect(),
            index_document: None,
        }
    }
}

/// Selection configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    /// Fixed seed for reproducible draws. Absent means a per-thread
    /// OS-seeded generator.
    pub seed: Option<u64>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines.
    pub json: bool,

    /// Record routing counters and flush them as CloudWatch EMF after
    /// every invocation.
    pub metrics_enabled: bool,

    /// CloudWatch namespace the counters are published under.
    pub metrics_namespace: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
            metrics_enabled: true,
            metrics_namespace: "frontend-router".to_string(),
        }
    }
}
