//! Integration tests for holding storage and profit seeding
//!
//! To run these tests:
//! ```
//! cargo test --test stock_management_integration
//! ```

mod common;

use investmate::common::errors::CalcError;
use investmate::common::types::Holding;
use investmate::{compute_profit, profit_for_holding, DerivationEngine, JsonFileStore, StockStore};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use common::{other_holding, sample_holding};

// ============================================================================
// Store Contract Tests
// ============================================================================

#[test]
fn holdings_survive_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holdings.json");

    {
        let mut store = JsonFileStore::open(&path).unwrap();
        store.add(sample_holding()).unwrap();
        store.add(other_holding()).unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.list().len(), 2);

    let holding = store.get("MSFT").unwrap();
    assert_eq!(holding.average_price, dec!(300.5));
    assert_eq!(holding.quantity, dec!(12));
}

#[test]
fn duplicate_add_is_rejected_and_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holdings.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.add(sample_holding()).unwrap();
    let err = store.add(sample_holding()).unwrap_err();
    assert!(matches!(err, CalcError::DuplicateSymbol(_)));

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.list().len(), 1);
}

#[test]
fn update_and_remove_unknown_symbols_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path().join("holdings.json")).unwrap();

    let err = store.update(sample_holding()).unwrap_err();
    assert!(matches!(err, CalcError::UnknownSymbol(_)));

    let err = store.remove("AAPL").unwrap_err();
    assert!(matches!(err, CalcError::UnknownSymbol(_)));
}

#[test]
fn remove_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holdings.json");

    {
        let mut store = JsonFileStore::open(&path).unwrap();
        store.add(sample_holding()).unwrap();
        store.add(other_holding()).unwrap();
        store.remove("AAPL").unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    assert!(store.get("AAPL").is_none());
    assert!(store.get("MSFT").is_some());
}

// ============================================================================
// Profit Seeding Tests
// ============================================================================

#[test]
fn profit_seeded_from_stored_holding_matches_direct_computation() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path().join("holdings.json")).unwrap();
    store.add(sample_holding()).unwrap();

    let holding = store.get("AAPL").unwrap();
    let seeded = profit_for_holding(&holding, dec!(12000)).unwrap();
    let direct = compute_profit(dec!(10000), dec!(5), dec!(12000)).unwrap();

    assert_eq!(seeded, direct);
    assert_eq!(seeded.amount, dec!(10000));
    assert_eq!(seeded.percentage, dec!(20));
}

#[test]
fn profit_for_corrupt_holding_reports_invalid_input() {
    // A holding with a zero average price can exist in storage (imported
    // data); profit against it must fail loudly, not silently
    let holding = Holding::new("BAD", "", dec!(0), dec!(2));
    let err = profit_for_holding(&holding, dec!(12000)).unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput(_)));
}

// ============================================================================
// Edit-Session Seeding Tests
// ============================================================================

#[test]
fn engine_seeded_from_stored_holding_shows_consistent_triple() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path().join("holdings.json")).unwrap();
    store.add(sample_holding()).unwrap();

    let holding = store.get("AAPL").unwrap();
    let mut engine = DerivationEngine::new();
    let updates = engine.seed(holding.average_price, holding.quantity);

    let texts: Vec<&str> = updates.iter().map(|u| u.text.as_str()).collect();
    assert_eq!(texts, vec!["10,000", "5", "50,000"]);
}
