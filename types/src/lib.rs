//! Common types used throughout reelhouse.
//!
//! This crate holds the domain value types shared between the spin engine
//! and its embedders: symbols and their catalog, spin configuration, reel
//! results and win data, player accounts, persisted spin records, and the
//! error taxonomy.
//!
//! All monetary amounts are [`rust_decimal::Decimal`] values quoted to two
//! minor-unit places. Win data is an explicit empty-when-no-win map, never
//! an `Option` sentinel.

mod error;
mod player;
mod spin;
mod symbol;

pub use error::EngineError;
pub use player::{Player, STARTING_BALANCE};
pub use spin::{
    GameSession, LineId, LinePositions, LineWin, ReelResult, SpinConfig, SpinOutcome, SpinRecord,
    WinData, DEFAULT_NUM_REELS, DEFAULT_VISIBLE_ROWS, MIN_MATCHING_SYMBOLS,
};
pub use symbol::{Symbol, SymbolCatalog, SymbolName};
