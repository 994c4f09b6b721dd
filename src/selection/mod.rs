//! Version selection subsystem.
//!
//! # Data Flow
//! ```text
//! Unversioned path → VersionRouter needs a version
//!     → VersionSelector::select(count)
//!         - uniform.rs (per-thread OS-seeded generator)
//!         - seeded.rs (fixed seed, reproducible sequence)
//!     → index into the VersionSet
//! ```
//!
//! # Design Decisions
//! - Selector only sees the count, never the tags
//! - Uniform over the list; not cryptographically secure
//! - Chosen once at cold start from SelectionConfig

pub mod seeded;
pub mod uniform;

pub use seeded::Seeded;
pub use uniform::UniformRandom;

use crate::config::SelectionConfig;

/// Strategy for drawing a version index.
pub trait VersionSelector: Send + Sync + std::fmt::Debug {
    /// Return an index in `0..count`, or `None` when `count` is zero.
    fn select(&self, count: usize) -> Option<usize>;
}

/// Build the selector described by the configuration.
pub fn from_config(config: &SelectionConfig) -> Box<dyn VersionSelector> {
    match config.seed {
        Some(seed) => Box::new(Seeded::new(seed)),
        None => Box::new(UniformRandom::new()),
    }
}
