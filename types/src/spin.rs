use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::symbol::SymbolName;

/// Default number of reels (columns) on a machine.
pub const DEFAULT_NUM_REELS: usize = 5;

/// Default number of visible symbols per reel.
pub const DEFAULT_VISIBLE_ROWS: usize = 3;

/// Minimum matching symbols on a line for a win.
pub const MIN_MATCHING_SYMBOLS: usize = 3;

/// Shape of the spin grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinConfig {
    pub num_reels: usize,
    pub visible_rows: usize,
}

impl SpinConfig {
    pub fn new(num_reels: usize, visible_rows: usize) -> Self {
        Self {
            num_reels,
            visible_rows,
        }
    }
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            num_reels: DEFAULT_NUM_REELS,
            visible_rows: DEFAULT_VISIBLE_ROWS,
        }
    }
}

/// Result of one spin: reel-indexed columns of symbol names.
///
/// Reel indices are contiguous from 0 and every reel holds exactly
/// `visible_rows` entries, top to bottom. The row-indexed view is derived
/// by transposition and never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelResult {
    reels: Vec<Vec<SymbolName>>,
}

impl ReelResult {
    pub fn new(reels: Vec<Vec<SymbolName>>) -> Self {
        Self { reels }
    }

    pub fn reels(&self) -> &[Vec<SymbolName>] {
        &self.reels
    }

    pub fn reel(&self, index: usize) -> Option<&[SymbolName]> {
        self.reels.get(index).map(|r| r.as_slice())
    }

    pub fn num_reels(&self) -> usize {
        self.reels.len()
    }

    /// Visible rows per reel (0 when there are no reels).
    pub fn visible_rows(&self) -> usize {
        self.reels.first().map(|r| r.len()).unwrap_or(0)
    }
}

/// Identifier of a line checked for wins.
///
/// Rows are 1-based, matching the line numbering shown to players.
/// Ordering is rows in numeric order, then the two diagonals, so win data
/// iterates deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LineId {
    /// A horizontal row, numbered from 1.
    Row(usize),
    /// Top-left to bottom-right diagonal.
    MainDiagonal,
    /// Top-right to bottom-left diagonal.
    AntiDiagonal,
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineId::Row(n) => write!(f, "{}", n),
            LineId::MainDiagonal => write!(f, "main_diagonal"),
            LineId::AntiDiagonal => write!(f, "anti_diagonal"),
        }
    }
}

impl From<LineId> for String {
    fn from(id: LineId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for LineId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "main_diagonal" => Ok(LineId::MainDiagonal),
            "anti_diagonal" => Ok(LineId::AntiDiagonal),
            other => other
                .parse::<usize>()
                .map(LineId::Row)
                .map_err(|_| format!("invalid line id: {}", other)),
        }
    }
}

/// Positions of a winning run on its line.
///
/// Rows report column indices; diagonals report grid coordinates
/// (row, column) along the diagonal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinePositions {
    Columns(Vec<usize>),
    Coords(Vec<(usize, usize)>),
}

impl LinePositions {
    /// Length of the winning run.
    pub fn len(&self) -> usize {
        match self {
            LinePositions::Columns(v) => v.len(),
            LinePositions::Coords(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single winning line: the symbol and the run it formed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWin {
    pub symbol: SymbolName,
    pub positions: LinePositions,
}

/// Wins detected on a grid, keyed by line.
///
/// An empty map means "no win" and is distinguishable from an error at
/// every call site; there is no null sentinel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WinData {
    wins: BTreeMap<LineId, LineWin>,
}

impl WinData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a win for a line, replacing any earlier entry.
    pub fn insert(&mut self, line: LineId, win: LineWin) {
        self.wins.insert(line, win);
    }

    pub fn get(&self, line: &LineId) -> Option<&LineWin> {
        self.wins.get(line)
    }

    /// Fold another strategy's wins into this one; later entries overwrite.
    pub fn merge(&mut self, other: WinData) {
        self.wins.extend(other.wins);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LineId, &LineWin)> {
        self.wins.iter()
    }

    pub fn len(&self) -> usize {
        self.wins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }
}

/// A game session linking a player's spins together.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub id: u64,
    pub player_id: u64,
}

/// The persisted record of one settled spin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinRecord {
    pub id: u64,
    pub session_id: u64,
    pub player_id: u64,
    pub bet: Decimal,
    pub payout: Decimal,
    pub reels: ReelResult,
    pub win_data: WinData,
}

/// Structured outcome of a spin request.
///
/// Immutable once produced. A failed outcome carries a human-readable
/// message and guarantees no balance change was retained.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub success: bool,
    pub spin_id: Option<u64>,
    pub reels: Option<ReelResult>,
    pub win_data: WinData,
    pub payout: Decimal,
    pub new_balance: Option<Decimal>,
    pub message: Option<String>,
}

impl SpinOutcome {
    /// A fully settled spin.
    pub fn settled(
        spin_id: u64,
        reels: ReelResult,
        win_data: WinData,
        payout: Decimal,
        new_balance: Decimal,
    ) -> Self {
        Self {
            success: true,
            spin_id: Some(spin_id),
            reels: Some(reels),
            win_data,
            payout,
            new_balance: Some(new_balance),
            message: None,
        }
    }

    /// A failed spin; the player's balance is exactly as it was before.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            spin_id: None,
            reels: None,
            win_data: WinData::new(),
            payout: Decimal::ZERO,
            new_balance: None,
            message: Some(message.into()),
        }
    }

    /// True when the spin hit at least one paying line.
    pub fn is_win(&self) -> bool {
        !self.win_data.is_empty() && self.payout > Decimal::ZERO
    }
}
