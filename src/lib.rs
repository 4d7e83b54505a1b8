//! InvestMate Library
//!
//! A Rust library for personal investment calculations: it keeps a
//! holding's average price, quantity and total cost mutually consistent
//! under partial edits and computes profit against a current market price.

pub mod calculator;
pub mod common;
pub mod config;
pub mod stocks;

// Re-export commonly used types
pub use common::errors::{CalcError, Result};
pub use common::types::{ChangeEvent, FieldId, FieldUpdate, Holding, ProfitResult};
pub use config::types::AppConfig;

// Calculator types
pub use calculator::{
    compute_profit, profit_for_holding, DerivationEngine, EngineState, FieldState,
    StockCalculator,
};

// Holding store types
pub use stocks::{BoxedStockStore, InMemoryStockStore, JsonFileStore, StockStore};
