//! Profit amount and percentage for a position at a given market price

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::common::errors::{CalcError, Result};
use crate::common::types::{Holding, ProfitResult};

/// Compute absolute and relative gain/loss for a position
///
/// `amount = (current_price - average_price) * quantity`
/// `percentage = (current_price - average_price) / average_price * 100`
///
/// # Errors
/// Returns [`CalcError::InvalidInput`] when `average_price <= 0` (the
/// percentage is undefined) or when quantity or current price is negative.
/// This is a hard failure, deliberately distinct from the empty-field
/// states the derivation engine treats as normal input.
pub fn compute_profit(
    average_price: Decimal,
    quantity: Decimal,
    current_price: Decimal,
) -> Result<ProfitResult> {
    if average_price <= Decimal::ZERO {
        return Err(CalcError::invalid_input(format!(
            "average price must be positive, got {average_price}"
        )));
    }
    if quantity < Decimal::ZERO {
        return Err(CalcError::invalid_input(format!(
            "quantity must not be negative, got {quantity}"
        )));
    }
    if current_price < Decimal::ZERO {
        return Err(CalcError::invalid_input(format!(
            "current price must not be negative, got {current_price}"
        )));
    }

    let delta = current_price - average_price;
    Ok(ProfitResult {
        amount: delta * quantity,
        percentage: delta / average_price * dec!(100),
    })
}

/// Compute profit for a stored holding at the supplied market price
///
/// The holding supplies average price and quantity; it is read-only input
/// and never mutated here.
pub fn profit_for_holding(holding: &Holding, current_price: Decimal) -> Result<ProfitResult> {
    compute_profit(holding.average_price, holding.quantity, current_price)
}
