//! Stateful iterator over the LCG sequence
//!
//! `reset` rebases the state without emitting; the recurrence is applied on
//! the next `advance`.

use crate::config::LcgConfig;
use crate::engine::LcgEngine;
use crate::error::LcgError;

/// Infinite LCG sequence driven by [`advance`](Self::advance) or [`Iterator::next`].
///
/// `Aleat` is its own iterator: there is no separate cursor. Iterating
/// through `&mut Aleat` (or [`Iterator::by_ref`]) consumes values from the
/// same state, so a second pass continues where the first stopped instead
/// of replaying the sequence.
///
/// ```
/// use lcg_core::{Aleat, LcgConfig};
///
/// let mut rand = Aleat::new(LcgConfig { m: 32, a: 9, c: 13, x0: 11 })?;
/// let first: Vec<i64> = rand.by_ref().take(4).collect();
/// assert_eq!(first, [16, 29, 18, 15]);
///
/// rand.reset(29);
/// let next: Vec<i64> = rand.by_ref().take(4).collect();
/// assert_eq!(next, [18, 15, 20, 1]);
/// # Ok::<(), lcg_core::LcgError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Aleat {
    engine: LcgEngine,
}

impl Aleat {
    pub fn new(config: LcgConfig) -> Result<Self, LcgError> {
        let engine = LcgEngine::new(config)?;
        tracing::debug!(?config, "created stateful LCG iterator");
        Ok(Self { engine })
    }

    /// Apply the recurrence and return the new value, in `[0, m)`.
    pub fn advance(&mut self) -> i64 {
        self.engine.step()
    }

    /// Replace the current value with `seed` (stored unreduced).
    /// `m`, `a` and `c` are kept. Nothing is emitted until the next `advance`.
    pub fn reset(&mut self, seed: i64) {
        tracing::trace!(seed, "reset iterator seed");
        self.engine.rebase(seed);
    }

    pub fn engine(&self) -> &LcgEngine {
        &self.engine
    }
}

impl Default for Aleat {
    fn default() -> Self {
        Self {
            engine: LcgEngine::default(),
        }
    }
}

impl Iterator for Aleat {
    type Item = i64;

    /// Never returns `None`.
    fn next(&mut self) -> Option<i64> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
