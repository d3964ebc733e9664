//! Ledger and persistence seams.
//!
//! The engine does not own how players or spin history are stored; it
//! talks to two narrow traits. [`PlayerLedger`] provides read-modify-write
//! access to a player's financial fields with full rollback on failure.
//! [`SpinStore`] records settled spins under a per-player game session.
//!
//! [`MemoryLedger`] and [`MemoryStore`] are in-memory implementations used
//! by tests and by embedders that bring no external store.

use std::collections::HashMap;

use parking_lot::Mutex;

use reelhouse_types::{EngineError, GameSession, Player, SpinRecord};

/// Transactional access to player balances.
pub trait PlayerLedger {
    /// Add a player to the ledger, replacing any existing entry.
    fn register(&self, player: Player);

    /// Read a player's current state.
    fn player(&self, id: u64) -> Result<Player, EngineError>;

    /// Read-modify-write one player as a single serializable transaction.
    ///
    /// The closure receives a working copy of the player. On `Ok` the copy
    /// is committed; on `Err` it is discarded and the stored player is
    /// exactly as before the call. Two concurrent transactions for the
    /// same player never interleave.
    fn with_player<T, F>(&self, id: u64, f: F) -> Result<T, EngineError>
    where
        F: FnOnce(&mut Player) -> Result<T, EngineError>;
}

/// Persistence handle for game sessions and spin records.
pub trait SpinStore {
    /// Fetch the player's game session, creating one if absent.
    fn get_or_create_session(&self, player_id: u64) -> Result<GameSession, EngineError>;

    /// Persist a settled spin and return its assigned id.
    ///
    /// The store owns id assignment; any id on the incoming record is
    /// replaced.
    fn record_spin(&self, record: SpinRecord) -> Result<u64, EngineError>;

    /// All recorded spins for a player, oldest first.
    fn player_history(&self, player_id: u64) -> Vec<SpinRecord>;
}

/// In-memory player ledger.
///
/// A single mutex guards the player map and is held for the whole
/// `with_player` closure, which is what serializes concurrent spins for
/// the same player.
#[derive(Default)]
pub struct MemoryLedger {
    players: Mutex<HashMap<u64, Player>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerLedger for MemoryLedger {
    fn register(&self, player: Player) {
        self.players.lock().insert(player.id, player);
    }

    fn player(&self, id: u64) -> Result<Player, EngineError> {
        self.players
            .lock()
            .get(&id)
            .cloned()
            .ok_or(EngineError::PlayerNotFound(id))
    }

    fn with_player<T, F>(&self, id: u64, f: F) -> Result<T, EngineError>
    where
        F: FnOnce(&mut Player) -> Result<T, EngineError>,
    {
        let mut players = self.players.lock();
        let stored = players.get_mut(&id).ok_or(EngineError::PlayerNotFound(id))?;

        let mut working = stored.clone();
        let value = f(&mut working)?;
        *stored = working;
        Ok(value)
    }
}

#[derive(Default)]
struct StoreInner {
    sessions: HashMap<u64, GameSession>,
    spins: Vec<SpinRecord>,
    next_session_id: u64,
    next_spin_id: u64,
}

/// In-memory spin store.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpinStore for MemoryStore {
    fn get_or_create_session(&self, player_id: u64) -> Result<GameSession, EngineError> {
        let mut inner = self.inner.lock();
        if let Some(session) = inner.sessions.get(&player_id) {
            return Ok(session.clone());
        }
        inner.next_session_id += 1;
        let session = GameSession {
            id: inner.next_session_id,
            player_id,
        };
        inner.sessions.insert(player_id, session.clone());
        Ok(session)
    }

    fn record_spin(&self, mut record: SpinRecord) -> Result<u64, EngineError> {
        let mut inner = self.inner.lock();
        inner.next_spin_id += 1;
        record.id = inner.next_spin_id;
        let id = record.id;
        inner.spins.push(record);
        Ok(id)
    }

    fn player_history(&self, player_id: u64) -> Vec<SpinRecord> {
        self.inner
            .lock()
            .spins
            .iter()
            .filter(|spin| spin.player_id == player_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_with_player_commits_on_ok() {
        let ledger = MemoryLedger::new();
        ledger.register(Player::with_balance(1, dec!(100.00)));

        let value = ledger
            .with_player(1, |player| {
                player.balance -= dec!(10.00);
                player.total_wager += dec!(10.00);
                Ok(player.balance)
            })
            .unwrap();

        assert_eq!(value, dec!(90.00));
        let player = ledger.player(1).unwrap();
        assert_eq!(player.balance, dec!(90.00));
        assert_eq!(player.total_wager, dec!(10.00));
    }

    #[test]
    fn test_with_player_discards_on_err() {
        let ledger = MemoryLedger::new();
        ledger.register(Player::with_balance(1, dec!(100.00)));

        let result: Result<(), _> = ledger.with_player(1, |player| {
            player.balance = dec!(0.00);
            player.total_won = dec!(999.00);
            Err(EngineError::Persistence("store down".into()))
        });

        assert!(result.is_err());
        let player = ledger.player(1).unwrap();
        assert_eq!(player.balance, dec!(100.00));
        assert_eq!(player.total_won, dec!(0.00));
    }

    #[test]
    fn test_unknown_player() {
        let ledger = MemoryLedger::new();
        assert_eq!(ledger.player(9), Err(EngineError::PlayerNotFound(9)));
        let result = ledger.with_player(9, |_| Ok(()));
        assert_eq!(result, Err(EngineError::PlayerNotFound(9)));
    }

    #[test]
    fn test_session_is_get_or_create() {
        let store = MemoryStore::new();
        let first = store.get_or_create_session(1).unwrap();
        let again = store.get_or_create_session(1).unwrap();
        let other = store.get_or_create_session(2).unwrap();

        assert_eq!(first, again);
        assert_ne!(first.id, other.id);
    }

    #[test]
    fn test_history_filters_by_player() {
        let store = MemoryStore::new();
        let session = store.get_or_create_session(1).unwrap();

        for player_id in [1, 2, 1] {
            store
                .record_spin(SpinRecord {
                    id: 0,
                    session_id: session.id,
                    player_id,
                    bet: dec!(10.00),
                    payout: dec!(0.00),
                    reels: Default::default(),
                    win_data: Default::default(),
                })
                .unwrap();
        }

        let history = store.player_history(1);
        assert_eq!(history.len(), 2);
        assert!(history.windows(2).all(|w| w[0].id < w[1].id));
    }
}
