//! Win detection strategies.
//!
//! Each strategy scans a reel result for winning lines and reports them as
//! [`WinData`]; an empty map means nothing hit. The composite strategy
//! folds the results of an ordered list of strategies into one map, with
//! later entries overwriting earlier ones on a colliding line id (row ids
//! and diagonal tags never actually collide).
//!
//! When several symbols on the same line independently reach the matching
//! threshold, exactly one win is recorded for that line, chosen
//! deterministically: the longest run wins, equal lengths go to the run
//! starting further left, and any remaining tie resolves to the
//! lexicographically smaller symbol name.

use reelhouse_types::{
    LineId, LinePositions, LineWin, ReelResult, SymbolName, WinData, MIN_MATCHING_SYMBOLS,
};

use crate::grid::{longest_run, transpose};

/// A way of scanning a grid for winning lines.
pub trait WinStrategy {
    /// Check a spin result for winning combinations.
    fn check_wins(&self, result: &ReelResult) -> WinData;
}

/// Checks each horizontal row for a winning run.
pub struct HorizontalStrategy;

/// Checks the main and anti diagonals for a winning run.
pub struct DiagonalStrategy;

/// Runs every configured strategy over the same grid and unions the
/// results.
pub struct CompositeStrategy {
    strategies: Vec<Box<dyn WinStrategy + Send + Sync>>,
}

impl CompositeStrategy {
    pub fn new(strategies: Vec<Box<dyn WinStrategy + Send + Sync>>) -> Self {
        Self { strategies }
    }
}

/// The default line set: horizontal rows, then both diagonals.
pub fn default_win_strategy() -> CompositeStrategy {
    CompositeStrategy::new(vec![Box::new(HorizontalStrategy), Box::new(DiagonalStrategy)])
}

/// Check a spin result against the default line set.
pub fn check_wins(result: &ReelResult) -> WinData {
    default_win_strategy().check_wins(result)
}

/// Find the winning run on one line, if any.
///
/// A symbol qualifies when it occurs at least [`MIN_MATCHING_SYMBOLS`]
/// times on the line and its longest consecutive run still reaches that
/// threshold. Among qualifying symbols the winner is chosen by the
/// deterministic rule documented at module level. Returned positions are
/// line-step indices.
fn best_line_run(line: &[SymbolName]) -> Option<(SymbolName, Vec<usize>)> {
    let mut best: Option<(SymbolName, Vec<usize>)> = None;
    let mut seen: Vec<&SymbolName> = Vec::new();

    for symbol in line {
        if seen.contains(&symbol) {
            continue;
        }
        seen.push(symbol);

        let occurrences: Vec<usize> = line
            .iter()
            .enumerate()
            .filter(|(_, s)| *s == symbol)
            .map(|(i, _)| i)
            .collect();
        if occurrences.len() < MIN_MATCHING_SYMBOLS {
            continue;
        }

        let run = longest_run(&occurrences);
        if run.len() < MIN_MATCHING_SYMBOLS {
            continue;
        }

        let better = match &best {
            None => true,
            Some((best_symbol, best_run)) => {
                run.len() > best_run.len()
                    || (run.len() == best_run.len() && run[0] < best_run[0])
                    || (run.len() == best_run.len()
                        && run[0] == best_run[0]
                        && symbol < best_symbol)
            }
        };
        if better {
            best = Some((symbol.clone(), run));
        }
    }

    best
}

impl WinStrategy for HorizontalStrategy {
    fn check_wins(&self, result: &ReelResult) -> WinData {
        let rows = transpose(result.reels());
        let mut hits = WinData::new();

        for (row_idx, row) in rows.iter().enumerate() {
            if let Some((symbol, run)) = best_line_run(row) {
                // Line ids shown to players are 1-based.
                hits.insert(
                    LineId::Row(row_idx + 1),
                    LineWin {
                        symbol,
                        positions: LinePositions::Columns(run),
                    },
                );
            }
        }

        hits
    }
}

impl WinStrategy for DiagonalStrategy {
    fn check_wins(&self, result: &ReelResult) -> WinData {
        let grid = transpose(result.reels());
        let mut hits = WinData::new();

        let cols = match grid.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return hits,
        };

        check_diagonal(&grid, 0, 1, LineId::MainDiagonal, &mut hits);
        check_diagonal(&grid, cols - 1, -1, LineId::AntiDiagonal, &mut hits);

        hits
    }
}

/// Walk one diagonal from row 0 and record its winning run, if any.
///
/// The run is computed over diagonal-step indices; the recorded positions
/// are the grid coordinates those steps map back to. Diagonals shorter
/// than the matching threshold never win.
fn check_diagonal(
    grid: &[Vec<SymbolName>],
    start_col: usize,
    col_step: isize,
    line: LineId,
    hits: &mut WinData,
) {
    let rows = grid.len();
    let cols = grid[0].len();

    let mut symbols = Vec::new();
    let mut coords = Vec::new();
    let mut row = 0usize;
    let mut col = start_col as isize;
    while row < rows && col >= 0 && (col as usize) < cols {
        symbols.push(grid[row][col as usize].clone());
        coords.push((row, col as usize));
        row += 1;
        col += col_step;
    }

    if symbols.len() < MIN_MATCHING_SYMBOLS {
        return;
    }

    if let Some((symbol, run)) = best_line_run(&symbols) {
        let positions = run.iter().map(|&i| coords[i]).collect();
        hits.insert(
            line,
            LineWin {
                symbol,
                positions: LinePositions::Coords(positions),
            },
        );
    }
}

impl WinStrategy for CompositeStrategy {
    fn check_wins(&self, result: &ReelResult) -> WinData {
        let mut combined = WinData::new();
        for strategy in &self.strategies {
            combined.merge(strategy.check_wins(result));
        }
        combined
    }
}
