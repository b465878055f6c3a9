//! Resumable LCG generator
//!
//! Explicit state machine for a suspend/resume sequence. The routine is
//! always suspended in its single running state, holding `(m, a, c, x)`.
//! Each resumption may carry an injected value, which replaces `x` before
//! the step that produces the result of that same resumption.

use crate::config::LcgConfig;
use crate::engine::LcgEngine;
use crate::error::LcgError;

/// Infinite LCG sequence with seed injection on resume.
///
/// Unlike [`Aleat::reset`](crate::Aleat::reset), injecting a value steps
/// immediately and returns the stepped value.
///
/// ```
/// use lcg_core::{AleatGen, LcgConfig};
///
/// let mut rand = AleatGen::new(LcgConfig { m: 64, a: 5, c: 46, x0: 36 })?;
/// let first: Vec<i64> = (0..4).map(|_| rand.pull()).collect();
/// assert_eq!(first, [34, 24, 38, 44]);
///
/// assert_eq!(rand.pull_with_inject(24), 38);
/// let next: Vec<i64> = rand.take(4).collect();
/// assert_eq!(next, [44, 10, 32, 14]);
/// # Ok::<(), lcg_core::LcgError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AleatGen {
    engine: LcgEngine,
}

impl AleatGen {
    pub fn new(config: LcgConfig) -> Result<Self, LcgError> {
        let engine = LcgEngine::new(config)?;
        tracing::debug!(?config, "created resumable LCG generator");
        Ok(Self { engine })
    }

    /// Resume without injection.
    pub fn pull(&mut self) -> i64 {
        self.engine.step()
    }

    /// Resume with `value` injected: `x = value`, then one step.
    pub fn pull_with_inject(&mut self, value: i64) -> i64 {
        tracing::trace!(value, "inject generator seed");
        self.engine.rebase(value);
        self.engine.step()
    }

    /// Single resume protocol. `None` means no injection and is exactly a
    /// plain [`pull`](Self::pull).
    pub fn resume(&mut self, injected: Option<i64>) -> i64 {
        match injected {
            Some(value) => self.pull_with_inject(value),
            None => self.pull(),
        }
    }

    pub fn engine(&self) -> &LcgEngine {
        &self.engine
    }
}

impl Default for AleatGen {
    fn default() -> Self {
        Self {
            engine: LcgEngine::default(),
        }
    }
}

impl Iterator for AleatGen {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        Some(self.pull())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
