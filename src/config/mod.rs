//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! router.toml (optional, packaged with the function)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → consumed once by EdgeHandler at cold start
//! ```
//!
//! # Design Decisions
//! - Lambda@Edge has no environment variables, so defaults are compiled in
//! - Config is immutable once loaded; changing versions means redeploying
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::RouterConfig;
pub use schema::RoutingConfig;
pub use schema::SelectionConfig;
pub use schema::ObservabilityConfig;
