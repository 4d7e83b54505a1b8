//! Common test utilities and fixtures

use investmate::common::types::{ChangeEvent, FieldId, FieldUpdate, Holding};
use investmate::DerivationEngine;
use rust_decimal_macros::dec;

/// Create a sample holding for testing
pub fn sample_holding() -> Holding {
    Holding::new("AAPL", "Apple Inc.", dec!(10000), dec!(5))
}

/// Create a second, distinct sample holding
pub fn other_holding() -> Holding {
    Holding::new("MSFT", "Microsoft Corp.", dec!(300.5), dec!(12))
}

/// Run a script of edits through a fresh engine and collect every update
/// it emits
pub fn drive_edits(edits: &[(FieldId, &str)]) -> (DerivationEngine, Vec<FieldUpdate>) {
    let mut engine = DerivationEngine::new();
    let mut updates = Vec::new();
    for (field, text) in edits {
        if let Some(update) = engine.apply(&ChangeEvent::new(*field, *text)) {
            updates.push(update);
        }
    }
    (engine, updates)
}
