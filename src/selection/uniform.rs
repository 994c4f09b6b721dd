//! Uniform random selection.

use rand::Rng;

use crate::selection::VersionSelector;

/// Draws from `rand::thread_rng()` on every call.
///
/// The thread-local generator is seeded from the OS once per thread, so
/// concurrent invocations share nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformRandom;

impl UniformRandom {
    pub fn new() -> Self {
        Self
    }
}

impl VersionSelector for UniformRandom {
    fn select(&self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        Some(rand::thread_rng().gen_range(0..count))
    }
}
