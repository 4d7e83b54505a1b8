//! Durable list of holdings

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::errors::{CalcError, Result};
use crate::common::types::Holding;

/// StockStore trait
///
/// Owns the durable list of holdings. The calculator only reads a
/// holding's average price and quantity to seed a computation; it never
/// writes back through this interface.
pub trait StockStore {
    /// All holdings, ordered by symbol
    fn list(&self) -> Vec<Holding>;

    /// Look up one holding by symbol
    fn get(&self, symbol: &str) -> Option<Holding>;

    /// Add a new holding
    ///
    /// # Errors
    /// [`CalcError::DuplicateSymbol`] if the symbol is already present.
    fn add(&mut self, holding: Holding) -> Result<()>;

    /// Replace an existing holding
    ///
    /// # Errors
    /// [`CalcError::UnknownSymbol`] if the symbol is not present.
    fn update(&mut self, holding: Holding) -> Result<()>;

    /// Remove a holding by symbol
    ///
    /// # Errors
    /// [`CalcError::UnknownSymbol`] if the symbol is not present.
    fn remove(&mut self, symbol: &str) -> Result<()>;
}

/// Boxed store for dynamic dispatch
pub type BoxedStockStore = Box<dyn StockStore>;

/// Simple in-memory store
///
/// Used by tests and by embedders that handle persistence themselves.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    holdings: BTreeMap<String, Holding>,
}

impl InMemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of holdings in the store
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

impl StockStore for InMemoryStockStore {
    fn list(&self) -> Vec<Holding> {
        self.holdings.values().cloned().collect()
    }

    fn get(&self, symbol: &str) -> Option<Holding> {
        self.holdings.get(symbol).cloned()
    }

    fn add(&mut self, holding: Holding) -> Result<()> {
        if self.holdings.contains_key(&holding.symbol) {
            return Err(CalcError::DuplicateSymbol(holding.symbol));
        }
        debug!(symbol = %holding.symbol, "adding holding");
        self.holdings.insert(holding.symbol.clone(), holding);
        Ok(())
    }

    fn update(&mut self, holding: Holding) -> Result<()> {
        if !self.holdings.contains_key(&holding.symbol) {
            return Err(CalcError::UnknownSymbol(holding.symbol));
        }
        debug!(symbol = %holding.symbol, "updating holding");
        self.holdings.insert(holding.symbol.clone(), holding);
        Ok(())
    }

    fn remove(&mut self, symbol: &str) -> Result<()> {
        match self.holdings.remove(symbol) {
            Some(_) => {
                debug!(%symbol, "removed holding");
                Ok(())
            }
            None => Err(CalcError::UnknownSymbol(symbol.to_string())),
        }
    }
}

/// JSON-file-backed store
///
/// Loads the whole file on open and rewrites it after every mutation. The
/// file holds a plain JSON array of holdings; a missing file is an empty
/// store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: InMemoryStockStore,
}

impl JsonFileStore {
    /// Open the store at `path`, creating an empty one if the file does
    /// not exist yet
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut inner = InMemoryStockStore::new();
        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let holdings: Vec<Holding> = serde_json::from_str(&contents)?;
            for holding in holdings {
                inner.add(holding)?;
            }
        }
        debug!(path = %path.display(), count = inner.len(), "opened holding store");
        Ok(Self { path, inner })
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&self.inner.list())?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl StockStore for JsonFileStore {
    fn list(&self) -> Vec<Holding> {
        self.inner.list()
    }

    fn get(&self, symbol: &str) -> Option<Holding> {
        self.inner.get(symbol)
    }

    fn add(&mut self, holding: Holding) -> Result<()> {
        self.inner.add(holding)?;
        self.save()
    }

    fn update(&mut self, holding: Holding) -> Result<()> {
        self.inner.update(holding)?;
        self.save()
    }

    fn remove(&mut self, symbol: &str) -> Result<()> {
        self.inner.remove(symbol)?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_holding() -> Holding {
        Holding::new("AAPL", "Apple Inc.", dec!(150), dec!(10))
    }

    #[test]
    fn test_add_and_get() {
        let mut store = InMemoryStockStore::new();
        store.add(sample_holding()).unwrap();

        let holding = store.get("AAPL").unwrap();
        assert_eq!(holding.average_price, dec!(150));
        assert_eq!(holding.quantity, dec!(10));
        assert!(store.get("MSFT").is_none());
    }

    #[test]
    fn test_add_duplicate_symbol_fails() {
        let mut store = InMemoryStockStore::new();
        store.add(sample_holding()).unwrap();

        let err = store.add(sample_holding()).unwrap_err();
        assert!(matches!(err, CalcError::DuplicateSymbol(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_unknown_symbol_fails() {
        let mut store = InMemoryStockStore::new();
        let err = store.update(sample_holding()).unwrap_err();
        assert!(matches!(err, CalcError::UnknownSymbol(_)));
    }

    #[test]
    fn test_update_replaces_figures() {
        let mut store = InMemoryStockStore::new();
        store.add(sample_holding()).unwrap();

        let revised = Holding::new("AAPL", "Apple Inc.", dec!(160), dec!(12));
        store.update(revised).unwrap();
        assert_eq!(store.get("AAPL").unwrap().quantity, dec!(12));
    }

    #[test]
    fn test_remove() {
        let mut store = InMemoryStockStore::new();
        store.add(sample_holding()).unwrap();
        store.remove("AAPL").unwrap();
        assert!(store.is_empty());

        let err = store.remove("AAPL").unwrap_err();
        assert!(matches!(err, CalcError::UnknownSymbol(_)));
    }

    #[test]
    fn test_list_is_ordered_by_symbol() {
        let mut store = InMemoryStockStore::new();
        store
            .add(Holding::new("MSFT", "Microsoft", dec!(300), dec!(2)))
            .unwrap();
        store.add(sample_holding()).unwrap();

        let symbols: Vec<String> = store.list().into_iter().map(|h| h.symbol).collect();
        assert_eq!(symbols, vec!["AAPL".to_string(), "MSFT".to_string()]);
    }

    #[test]
    fn test_json_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holdings.json");

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.add(sample_holding()).unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        let holding = store.get("AAPL").unwrap();
        assert_eq!(holding.average_price, dec!(150));
        assert_eq!(holding.quantity, dec!(10));
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("none.json")).unwrap();
        assert!(store.list().is_empty());
    }
}
