//! Arithmetic relation among average price, quantity and total price
//!
//! The triple is bound by `total = average * quantity`; each function
//! solves the relation for one field given the other two.

use rust_decimal::Decimal;

/// Calculation utilities for the price/quantity/total relation
///
/// Each solver returns `None` unless both drivers are strictly positive.
/// A missing or non-positive driver is normal user-input state, so no
/// error is raised.
pub struct StockCalculator;

impl StockCalculator {
    /// Total price from average price and quantity
    ///
    /// # Arguments
    /// * `average_price` - Cost basis per unit, must be > 0
    /// * `quantity` - Units held, must be > 0
    ///
    /// # Returns
    /// `average_price * quantity`, or `None` when a driver is non-positive
    pub fn total_price(average_price: Decimal, quantity: Decimal) -> Option<Decimal> {
        if average_price <= Decimal::ZERO || quantity <= Decimal::ZERO {
            return None;
        }
        Some(average_price * quantity)
    }

    /// Quantity from average price and total price
    ///
    /// # Arguments
    /// * `average_price` - Cost basis per unit, must be > 0
    /// * `total_price` - Total position cost, must be > 0
    ///
    /// # Returns
    /// `total_price / average_price`, or `None` when a driver is non-positive
    pub fn quantity(average_price: Decimal, total_price: Decimal) -> Option<Decimal> {
        if average_price <= Decimal::ZERO || total_price <= Decimal::ZERO {
            return None;
        }
        total_price.checked_div(average_price)
    }

    /// Average price from total price and quantity
    ///
    /// Present for completeness; the reference edit flow always treats
    /// average price as a driving field and never recomputes it.
    pub fn average_price(total_price: Decimal, quantity: Decimal) -> Option<Decimal> {
        if total_price <= Decimal::ZERO || quantity <= Decimal::ZERO {
            return None;
        }
        total_price.checked_div(quantity)
    }
}
