//! Generator parameters
//!
//! Parameters are always set by name, never by position, so a multiplier
//! can't be passed where the increment was meant.

use serde::{Deserialize, Serialize};

use crate::error::LcgError;

/// Default modulus (2^48)
pub const DEFAULT_MODULUS: i64 = 1 << 48;
pub const DEFAULT_MULTIPLIER: i64 = 25_214_903_917;
pub const DEFAULT_INCREMENT: i64 = 11;
pub const DEFAULT_SEED: i64 = 1_212_121;

/// LCG parameters `(m, a, c)` plus the starting seed `x0`.
///
/// `a` and `c` may be any integer. `x0` need not be reduced mod `m`; it is
/// reduced by the first step. Only `m > 0` is required.
///
/// ```
/// use lcg_core::LcgConfig;
///
/// let config = LcgConfig { m: 32, a: 9, c: 13, x0: 11 };
/// let same = LcgConfig::default()
///     .with_modulus(32)
///     .with_multiplier(9)
///     .with_increment(13)
///     .with_seed(11);
/// assert_eq!(config, same);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LcgConfig {
    /// Modulus, exclusive upper bound of every emitted value
    pub m: i64,
    /// Multiplier
    pub a: i64,
    /// Increment
    pub c: i64,
    /// Initial seed
    pub x0: i64,
}

impl LcgConfig {
    pub fn with_modulus(mut self, m: i64) -> Self {
        self.m = m;
        self
    }

    pub fn with_multiplier(mut self, a: i64) -> Self {
        self.a = a;
        self
    }

    pub fn with_increment(mut self, c: i64) -> Self {
        self.c = c;
        self
    }

    pub fn with_seed(mut self, x0: i64) -> Self {
        self.x0 = x0;
        self
    }

    /// Fail fast on a non-positive modulus.
    pub fn validate(&self) -> Result<(), LcgError> {
        if self.m <= 0 {
            return Err(LcgError::InvalidModulus { m: self.m });
        }
        Ok(())
    }

    /// Parse a JSON object such as `{"m": 64, "a": 5}`. Missing keys take
    /// their defaults; unknown keys are rejected.
    pub fn from_json(json: &str) -> Result<Self, LcgError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(?config, "parsed generator config");
        Ok(config)
    }
}

impl Default for LcgConfig {
    fn default() -> Self {
        Self {
            m: DEFAULT_MODULUS,
            a: DEFAULT_MULTIPLIER,
            c: DEFAULT_INCREMENT,
            x0: DEFAULT_SEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_parameters() {
        let config = LcgConfig::default();
        assert_eq!(config.m, 281_474_976_710_656);
        assert_eq!(config.a, 25214903917);
        assert_eq!(config.c, 11);
        assert_eq!(config.x0, 1212121);
    }

    #[test]
    fn validate_rejects_non_positive_modulus() {
        for m in [0, -1, i64::MIN] {
            let err = LcgConfig::default().with_modulus(m).validate().unwrap_err();
            assert!(matches!(err, LcgError::InvalidModulus { m: got } if got == m));
        }
        assert!(LcgConfig::default().with_modulus(1).validate().is_ok());
    }

    #[test]
    fn from_json_fills_missing_fields_with_defaults() {
        let config = LcgConfig::from_json(r#"{"m": 64, "x0": 36}"#).unwrap();
        assert_eq!(config.m, 64);
        assert_eq!(config.x0, 36);
        assert_eq!(config.a, DEFAULT_MULTIPLIER);
        assert_eq!(config.c, DEFAULT_INCREMENT);

        assert_eq!(LcgConfig::from_json("{}").unwrap(), LcgConfig::default());
    }

    #[test]
    fn from_json_rejects_unknown_keys() {
        let err = LcgConfig::from_json(r#"{"modulus": 64}"#).unwrap_err();
        assert!(matches!(err, LcgError::Config(_)));
    }

    #[test]
    fn from_json_validates_modulus() {
        let err = LcgConfig::from_json(r#"{"m": 0}"#).unwrap_err();
        assert!(matches!(err, LcgError::InvalidModulus { m: 0 }));
    }

    #[test]
    fn serializes_with_field_names() {
        let json = serde_json::to_string(&LcgConfig { m: 32, a: 9, c: 13, x0: 11 }).unwrap();
        assert_eq!(json, r#"{"m":32,"a":9,"c":13,"x0":11}"#);
    }
}
