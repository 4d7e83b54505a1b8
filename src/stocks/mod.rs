//! Holding management
//!
//! Stores the user's recorded positions and hands them to the calculator
//! as read-only input.

pub mod store;

pub use store::{BoxedStockStore, InMemoryStockStore, JsonFileStore, StockStore};
