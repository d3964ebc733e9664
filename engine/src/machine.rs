//! Spin orchestration and settlement.

use rand::Rng;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use reelhouse_types::{
    EngineError, SpinConfig, SpinOutcome, SpinRecord, SymbolCatalog,
};

use crate::ledger::{PlayerLedger, SpinStore};
use crate::payout::calculate_payout;
use crate::reels::generate_spin;
use crate::strategy::{default_win_strategy, WinStrategy};

/// A slot machine bound to a symbol catalog, a player ledger and a spin
/// store.
///
/// One spin runs Validating -> Debited -> Resolved -> Settled, or Failed:
/// the bet is debited, the grid generated and scored, any payout credited
/// and the record persisted, all inside a single ledger transaction. Any
/// failure after the debit rolls the player back to their pre-spin state;
/// no partial balance change is ever observable.
pub struct SlotMachine<L, S> {
    config: SpinConfig,
    catalog: SymbolCatalog,
    strategy: Box<dyn WinStrategy + Send + Sync>,
    ledger: L,
    store: S,
}

impl<L: PlayerLedger, S: SpinStore> SlotMachine<L, S> {
    /// Create a machine with the default grid shape and line set.
    pub fn new(catalog: SymbolCatalog, ledger: L, store: S) -> Self {
        Self {
            config: SpinConfig::default(),
            catalog,
            strategy: Box::new(default_win_strategy()),
            ledger,
            store,
        }
    }

    /// Override the grid shape.
    pub fn with_config(mut self, config: SpinConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the win strategy.
    pub fn with_strategy(mut self, strategy: Box<dyn WinStrategy + Send + Sync>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Process a single spin for a player.
    ///
    /// Returns a structured outcome in every case; errors during
    /// settlement are folded into a failed outcome after the ledger
    /// transaction has been rolled back.
    pub fn play_spin<R: Rng + ?Sized>(
        &self,
        player_id: u64,
        bet_size: Decimal,
        rng: &mut R,
    ) -> SpinOutcome {
        if bet_size <= Decimal::ZERO {
            return SpinOutcome::failed("bet must be greater than zero");
        }

        let settled = self.ledger.with_player(player_id, |player| {
            if player.balance < bet_size {
                return Err(EngineError::InsufficientBalance);
            }

            // Debited: both fields move together or not at all.
            player.balance -= bet_size;
            player.total_wager += bet_size;

            // Resolved.
            let reels = generate_spin(&self.config, &self.catalog, rng)?;
            let win_data = self.strategy.check_wins(&reels);
            let payout = calculate_payout(&win_data, bet_size, &self.catalog)?;

            // Settled.
            if payout > Decimal::ZERO {
                player.balance += payout;
                player.total_won += payout;
            }

            let session = self.store.get_or_create_session(player_id)?;
            let spin_id = self.store.record_spin(SpinRecord {
                id: 0,
                session_id: session.id,
                player_id,
                bet: bet_size,
                payout,
                reels: reels.clone(),
                win_data: win_data.clone(),
            })?;

            Ok((spin_id, reels, win_data, payout, player.balance))
        });

        match settled {
            Ok((spin_id, reels, win_data, payout, new_balance)) => {
                debug!(player_id, spin_id, %bet_size, %payout, "spin settled");
                SpinOutcome::settled(spin_id, reels, win_data, payout, new_balance)
            }
            Err(EngineError::InsufficientBalance) => {
                debug!(player_id, %bet_size, "spin rejected: insufficient balance");
                SpinOutcome::failed("insufficient balance")
            }
            Err(EngineError::PlayerNotFound(id)) => {
                SpinOutcome::failed(format!("player not found: {}", id))
            }
            Err(err) => {
                warn!(player_id, %err, "spin aborted, balance rolled back");
                SpinOutcome::failed(format!("error processing spin: {}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{MemoryLedger, MemoryStore};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use reelhouse_types::{Player, Symbol};
    use rust_decimal_macros::dec;

    fn test_machine() -> SlotMachine<MemoryLedger, MemoryStore> {
        let catalog = SymbolCatalog::new(vec![
            Symbol::new("diamond", dec!(3.0)),
            Symbol::new("floppy", dec!(2.0)),
            Symbol::new("hourglass", dec!(1.5)),
            Symbol::new("telephone", dec!(2.5)),
            Symbol::new("seven", dec!(5.0)),
        ]);
        SlotMachine::new(catalog, MemoryLedger::new(), MemoryStore::new())
    }

    #[test]
    fn test_zero_bet_rejected() {
        let machine = test_machine();
        machine.ledger().register(Player::new(1));

        let outcome = machine.play_spin(1, dec!(0.00), &mut StdRng::seed_from_u64(1));
        assert!(!outcome.success);
        assert!(outcome.message.unwrap().contains("greater than zero"));
    }

    #[test]
    fn test_unknown_player_fails_cleanly() {
        let machine = test_machine();
        let outcome = machine.play_spin(42, dec!(10.00), &mut StdRng::seed_from_u64(1));
        assert!(!outcome.success);
        assert!(outcome.message.unwrap().contains("player not found"));
    }

    #[test]
    fn test_spin_debits_and_records() {
        let machine = test_machine();
        machine.ledger().register(Player::with_balance(1, dec!(1000.00)));

        let outcome = machine.play_spin(1, dec!(10.00), &mut StdRng::seed_from_u64(7));
        assert!(outcome.success);

        let player = machine.ledger().player(1).unwrap();
        assert_eq!(player.total_wager, dec!(10.00));
        assert_eq!(player.balance, dec!(1000.00) - dec!(10.00) + outcome.payout);
        assert_eq!(player.total_won, outcome.payout);
        assert_eq!(outcome.new_balance, Some(player.balance));

        let history = machine.store().player_history(1);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].bet, dec!(10.00));
        assert_eq!(history[0].payout, outcome.payout);
        assert_eq!(Some(history[0].id), outcome.spin_id);
    }
}
