//! Random reel generation.

use rand::seq::index;
use rand::Rng;

use reelhouse_types::{EngineError, ReelResult, SpinConfig, SymbolCatalog};

/// Generate a random spin: one column of `visible_rows` symbols per reel.
///
/// Each reel is drawn independently by sampling the catalog without
/// replacement, preserving draw order top to bottom. A symbol may repeat
/// across reels but never twice within one reel's visible window. The
/// random source is owned by the caller so spins stay independent and
/// individually reproducible.
///
/// Fails fast with [`EngineError::Config`] when the grid shape is
/// degenerate or the catalog is smaller than the visible window.
pub fn generate_spin<R: Rng + ?Sized>(
    config: &SpinConfig,
    catalog: &SymbolCatalog,
    rng: &mut R,
) -> Result<ReelResult, EngineError> {
    if config.num_reels == 0 || config.visible_rows == 0 {
        return Err(EngineError::Config(format!(
            "grid shape must be positive, got {} reels x {} rows",
            config.num_reels, config.visible_rows
        )));
    }
    if catalog.len() < config.visible_rows {
        return Err(EngineError::Config(format!(
            "catalog holds {} symbols but each reel shows {}",
            catalog.len(),
            config.visible_rows
        )));
    }

    let mut reels = Vec::with_capacity(config.num_reels);
    for _ in 0..config.num_reels {
        let drawn = index::sample(rng, catalog.len(), config.visible_rows)
            .into_iter()
            .map(|i| catalog.symbols()[i].name.clone())
            .collect();
        reels.push(drawn);
    }

    Ok(ReelResult::new(reels))
}
