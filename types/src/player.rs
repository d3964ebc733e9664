use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Balance granted to a freshly registered player.
pub const STARTING_BALANCE: Decimal = dec!(1000.00);

/// A player account as seen by the spin engine.
///
/// Only the three financial fields are ever mutated, and only through the
/// orchestrator's settlement transaction: either both the debit and any
/// credit land, or neither survives a failed spin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u64,
    pub balance: Decimal,
    pub total_wager: Decimal,
    pub total_won: Decimal,
}

impl Player {
    /// Create a new player with the standard starting balance.
    pub fn new(id: u64) -> Self {
        Self::with_balance(id, STARTING_BALANCE)
    }

    /// Create a new player with an explicit opening balance.
    pub fn with_balance(id: u64, balance: Decimal) -> Self {
        Self {
            id,
            balance,
            total_wager: Decimal::ZERO,
            total_won: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new(7);
        assert_eq!(player.id, 7);
        assert_eq!(player.balance, STARTING_BALANCE);
        assert_eq!(player.total_wager, Decimal::ZERO);
        assert_eq!(player.total_won, Decimal::ZERO);
    }

    #[test]
    fn test_with_balance() {
        let player = Player::with_balance(1, dec!(50.00));
        assert_eq!(player.balance, dec!(50.00));
    }
}
