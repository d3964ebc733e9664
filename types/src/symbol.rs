use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name of a slot symbol, unique within a catalog.
pub type SymbolName = String;

/// A slot symbol and its payout multiplier.
///
/// The multiplier converts a winning run's length and the bet size into a
/// monetary payout: `bet * run_length * payout_multiplier`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: SymbolName,
    pub payout_multiplier: Decimal,
}

impl Symbol {
    pub fn new(name: impl Into<SymbolName>, payout_multiplier: Decimal) -> Self {
        Self {
            name: name.into(),
            payout_multiplier,
        }
    }
}

/// Read-only catalog of symbols a machine draws from.
///
/// The engine treats the catalog as immutable for the duration of a spin;
/// refreshing or caching it is the caller's concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
}

impl SymbolCatalog {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Look up a symbol by name.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_catalog_lookup() {
        let catalog = SymbolCatalog::new(vec![
            Symbol::new("diamond", dec!(3.0)),
            Symbol::new("floppy", dec!(2.0)),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("diamond").unwrap().payout_multiplier, dec!(3.0));
        assert!(catalog.get("telephone").is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = SymbolCatalog::new(vec![]);
        assert!(catalog.is_empty());
        assert!(catalog.get("anything").is_none());
    }
}
