//! Walk through both access patterns on small parameters.
//!
//! Run with: `cargo run -p lcg_core --example sequences`

use anyhow::Result;
use lcg_core::{Aleat, AleatGen, LcgConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("lcg_core v{}", lcg_core::VERSION);

    let mut rand = Aleat::new(LcgConfig { m: 32, a: 9, c: 13, x0: 11 })?;
    let first: Vec<i64> = rand.by_ref().take(4).collect();
    tracing::info!(?first, "iterator");
    rand.reset(29);
    let after_reset: Vec<i64> = rand.by_ref().take(4).collect();
    tracing::info!(?after_reset, "iterator after reset(29)");

    let config = LcgConfig::from_json(r#"{"m": 64, "a": 5, "c": 46, "x0": 36}"#)?;
    let mut generator = AleatGen::new(config)?;
    let first: Vec<i64> = generator.by_ref().take(4).collect();
    tracing::info!(?first, "generator");
    let injected = generator.resume(Some(24));
    tracing::info!(injected, "generator resumed with 24");
    let rest: Vec<i64> = generator.take(4).collect();
    tracing::info!(?rest, "generator after injection");

    let defaults: Vec<i64> = Aleat::default().take(3).collect();
    tracing::info!(?defaults, "default parameters");

    Ok(())
}
