//! Field derivation and profit calculation
//!
//! This module is the core of the application: it keeps the three linked
//! figures of a position consistent under partial edits and computes
//! profit against a current market price.
//!
//! # Architecture
//!
//! ```text
//! view layer edit ("quantity" = "5")
//!        │
//!        ▼
//! ChangeEvent ──► DerivationEngine
//!                    │  numeric::parse
//!                    │  target selection (never the user's field)
//!                    │  StockCalculator (total = average × quantity)
//!                    │  numeric::format
//!                    ▼
//!                FieldUpdate ("total_price" = "50,000")
//! ```
//!
//! Profit computation is an independent request/response call seeded
//! either from explicit figures or from a stored [`Holding`](crate::common::types::Holding).
//!
//! # Components
//!
//! - [`numeric`]: raw text ⇄ decimal conversion with grouping separators
//! - [`StockCalculator`]: solves `total = average × quantity` for any field
//! - [`DerivationEngine`]: per-triple state machine with cycle prevention
//! - [`compute_profit`]: gain/loss amount and percentage

pub mod engine;
pub mod numeric;
pub mod profit;
pub mod rules;

pub use engine::{DerivationEngine, EngineState, FieldState};
pub use profit::{compute_profit, profit_for_holding};
pub use rules::StockCalculator;
