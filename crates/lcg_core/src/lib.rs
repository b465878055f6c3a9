//! LCG Core
//!
//! Linear congruential pseudo-random sequences:
//! - Recurrence engine (`x = (a*x + c) mod m`)
//! - Stateful iterator with out-of-band seed reset
//! - Resumable generator with seed injection on resume
//!
//! The generator is deterministic and NOT cryptographically secure.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod iter;

pub use config::LcgConfig;
pub use engine::LcgEngine;
pub use error::LcgError;
pub use generator::AleatGen;
pub use iter::Aleat;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
