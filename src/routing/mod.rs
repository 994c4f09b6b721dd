//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request uri ("/vue/songs/42", "/", "/about")
//!     → matcher.rs (first path segment → candidate prefix)
//!     → version.rs (exact membership test against the VersionSet)
//!     → router.rs (pass through, or draw a version and prepend it)
//!     → Return: RouteDecision
//!
//! Version compilation (at cold start):
//!     RoutingConfig.versions
//!     → Validate tag shape
//!     → Freeze as immutable VersionSet
//! ```
//!
//! # Design Decisions
//! - Versions compiled at startup, immutable at runtime
//! - Exact segment match only: "/vuetify" never matches "/vue"
//! - Original path is always kept verbatim as the suffix
//! - No I/O and no logging in this module

pub mod matcher;
pub mod router;
pub mod version;

pub use router::{RouteDecision, VersionRouter};
pub use version::{VersionSet, VersionTag};
