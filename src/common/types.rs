//! Unified types shared by the calculator engine and the holding store

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier for one of the three linked input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    AveragePrice,
    Quantity,
    TotalPrice,
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldId::AveragePrice => write!(f, "average_price"),
            FieldId::Quantity => write!(f, "quantity"),
            FieldId::TotalPrice => write!(f, "total_price"),
        }
    }
}

/// A raw-text edit on one field, as delivered by the view layer
///
/// One event per keystroke/commit. Events must be delivered in the order
/// the user produced them; the engine processes each to completion before
/// the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Which field the user edited
    pub field: FieldId,
    /// The field's full text after the edit, possibly with grouping commas
    pub text: String,
}

impl ChangeEvent {
    pub fn new(field: FieldId, text: impl Into<String>) -> Self {
        Self {
            field,
            text: text.into(),
        }
    }
}

/// A display-ready update pushed back to the view layer
///
/// Empty `text` means the field was cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    /// Which field to rewrite
    pub field: FieldId,
    /// Formatted text to display, or empty to clear
    pub text: String,
}

impl FieldUpdate {
    pub fn new(field: FieldId, text: impl Into<String>) -> Self {
        Self {
            field,
            text: text.into(),
        }
    }

    /// Returns true if this update clears the field
    pub fn is_clear(&self) -> bool {
        self.text.is_empty()
    }
}

/// A recorded position in one stock symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, unique within a store
    pub symbol: String,
    /// Human-readable company/asset name
    #[serde(default)]
    pub name: String,
    /// Average cost basis per unit
    pub average_price: Decimal,
    /// Number of units held
    pub quantity: Decimal,
    /// When this holding was last written
    pub updated_at: DateTime<Utc>,
}

impl Holding {
    /// Create a holding stamped with the current time
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        average_price: Decimal,
        quantity: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            average_price,
            quantity,
            updated_at: Utc::now(),
        }
    }

    /// Total acquisition cost of this position
    pub fn total_cost(&self) -> Decimal {
        self.average_price * self.quantity
    }
}

/// Absolute and relative gain/loss versus average price at a given
/// current price
///
/// Computed fresh on each request; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitResult {
    /// `(current - average) * quantity`
    pub amount: Decimal,
    /// `(current - average) / average * 100`
    pub percentage: Decimal,
}

impl ProfitResult {
    /// Returns true if the position is at or above break-even
    pub fn is_gain(&self) -> bool {
        self.amount >= Decimal::ZERO
    }
}
