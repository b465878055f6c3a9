use thiserror::Error;

/// Errors raised while configuring a generator.
#[derive(Debug, Error)]
pub enum LcgError {
    #[error("invalid configuration: modulus must be positive, got {m}")]
    InvalidModulus { m: i64 },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
