use thiserror::Error;

/// Errors surfaced by the spin engine.
///
/// `InsufficientBalance` and `PlayerNotFound` are user-recoverable and are
/// folded into a failed [`crate::SpinOutcome`] without mutating anything.
/// `Config` indicates a deployment bug (bad grid shape, catalog smaller
/// than the visible window) and must not be retried. `SymbolLookup` and
/// `Persistence` abort an in-progress settlement; the orchestrator rolls
/// the player's balance back to its pre-spin value before surfacing them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Player balance does not cover the requested bet.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// Invalid engine configuration (fatal, do not retry).
    #[error("configuration error: {0}")]
    Config(String),

    /// Win data references a symbol missing from the catalog.
    #[error("unknown symbol: {0}")]
    SymbolLookup(String),

    /// The external store rejected a write.
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// No player registered under the given id.
    #[error("player not found: {0}")]
    PlayerNotFound(u64),
}
