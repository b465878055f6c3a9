//! LCG recurrence
//!
//! `x = (a*x + c) mod m`, computed exactly. Operands are 64-bit and the
//! multiply-add is carried out in 128 bits, so the default parameters
//! (products near 2^83) never overflow before the reduction.

use crate::config::LcgConfig;
use crate::error::LcgError;

/// Recurrence state `(m, a, c, x)`
///
/// After any [`step`](Self::step), `0 <= x < m`. Between a
/// [`rebase`](Self::rebase) and the next step, `x` holds the raw seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcgEngine {
    m: i64,
    a: i64,
    c: i64,
    x: i64,
}

impl LcgEngine {
    pub fn new(config: LcgConfig) -> Result<Self, LcgError> {
        config.validate()?;
        Ok(Self {
            m: config.m,
            a: config.a,
            c: config.c,
            x: config.x0,
        })
    }

    /// Advance one step and return the new state.
    #[inline]
    pub fn step(&mut self) -> i64 {
        let next = (self.a as i128 * self.x as i128 + self.c as i128).rem_euclid(self.m as i128);
        // 0 <= next < m <= i64::MAX
        self.x = next as i64;
        self.x
    }

    /// Overwrite the state with `seed` as-is. Reduction happens on the next step.
    pub fn rebase(&mut self, seed: i64) {
        self.x = seed;
    }

    pub fn state(&self) -> i64 {
        self.x
    }

    pub fn modulus(&self) -> i64 {
        self.m
    }

    pub fn multiplier(&self) -> i64 {
        self.a
    }

    pub fn increment(&self) -> i64 {
        self.c
    }
}

impl Default for LcgEngine {
    fn default() -> Self {
        let config = LcgConfig::default();
        Self {
            m: config.m,
            a: config.a,
            c: config.c,
            x: config.x0,
        }
    }
}
