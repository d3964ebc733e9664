//! Payout calculation.

use rust_decimal::Decimal;

use reelhouse_types::{EngineError, SymbolCatalog, WinData};

/// Minor-unit precision of the settled currency.
const MINOR_UNIT_DP: u32 = 2;

/// Convert win data and a bet size into a monetary payout.
///
/// Empty win data pays exactly zero. Otherwise each winning line
/// contributes `bet_size * run_length * payout_multiplier`. A win that
/// references a symbol missing from the catalog fails with
/// [`EngineError::SymbolLookup`]; that can only happen when the grid and
/// catalog disagree, which is a bug upstream. The total is rounded to the
/// currency's minor-unit precision.
pub fn calculate_payout(
    win_data: &WinData,
    bet_size: Decimal,
    catalog: &SymbolCatalog,
) -> Result<Decimal, EngineError> {
    if win_data.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let mut total = Decimal::ZERO;
    for (_, win) in win_data.iter() {
        let symbol = catalog
            .get(&win.symbol)
            .ok_or_else(|| EngineError::SymbolLookup(win.symbol.clone()))?;
        total += bet_size * Decimal::from(win.positions.len()) * symbol.payout_multiplier;
    }

    Ok(total.round_dp(MINOR_UNIT_DP))
}
