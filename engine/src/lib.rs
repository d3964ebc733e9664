//! Reelhouse spin engine.
//!
//! This crate computes the outcome of a single slot-machine spin and
//! settles its financial effect on a player's balance:
//!
//! - [`reels::generate_spin`] draws a random grid from a symbol catalog;
//! - [`strategy`] scans the grid for winning lines (horizontal rows and
//!   both diagonals) using a longest-consecutive-run search;
//! - [`payout::calculate_payout`] converts win data and a bet size into a
//!   monetary amount;
//! - [`machine::SlotMachine`] composes the above and enforces the
//!   balance-check / debit / credit / persist sequence as one atomic unit.
//!
//! ## Determinism
//! The random source is the only non-deterministic input. It is passed
//! into every spin by the caller, is never shared between spins, and can
//! be seeded for reproducible outcomes in tests.
//!
//! ## Settlement
//! All financial mutations for one spin happen inside a single
//! [`ledger::PlayerLedger::with_player`] transaction: either the debit,
//! any credit, and the persisted record all land, or the player's balance
//! is left exactly as it was before the spin began.

pub mod grid;
pub mod ledger;
pub mod machine;
pub mod payout;
pub mod reels;
pub mod strategy;


pub use grid::{longest_run, transpose};
pub use ledger::{MemoryLedger, MemoryStore, PlayerLedger, SpinStore};
pub use machine::SlotMachine;
pub use payout::calculate_payout;
pub use reels::generate_spin;
pub use strategy::{
    check_wins, default_win_strategy, CompositeStrategy, DiagonalStrategy, HorizontalStrategy,
    WinStrategy,
};
