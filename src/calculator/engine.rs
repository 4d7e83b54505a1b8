//! Reciprocal derivation over the average price / quantity / total price
//! triple
//!
//! The engine consumes one [`ChangeEvent`] at a time and emits at most one
//! [`FieldUpdate`] back. Which field gets recomputed depends on which field
//! the user touched: the engine never rewrites the field the user is
//! typing in, and its own writes never count as edits, so a derived value
//! can never re-trigger derivation of its sources.

use crossbeam_channel::{Receiver, Sender};
use rust_decimal::Decimal;
use tracing::debug;

use crate::calculator::numeric;
use crate::calculator::rules::StockCalculator;
use crate::common::types::{ChangeEvent, FieldId, FieldUpdate};

/// One text field together with its parsed value
///
/// `value` is `None` whenever the text is empty or not parseable as a
/// non-negative decimal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState {
    raw: String,
    value: Option<Decimal>,
}

impl FieldState {
    fn set_text(&mut self, text: &str) {
        self.raw = text.to_string();
        self.value = numeric::parse(text);
    }

    fn clear(&mut self) {
        self.raw.clear();
        self.value = None;
    }

    /// Current display text
    pub fn text(&self) -> &str {
        &self.raw
    }

    /// Parsed value, if the text is a valid non-negative number
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Strictly positive parsed value, usable as a derivation driver
    fn driving(&self) -> Option<Decimal> {
        self.value.filter(|v| *v > Decimal::ZERO)
    }
}

/// Outcome of the most recently processed change event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Nothing could be derived and nothing needed clearing
    Idle,
    /// The last event produced a derived value
    Deriving,
    /// The last event invalidated a driver and the dependent field was
    /// emptied
    Cleared,
}

/// Keeps one field triple mutually consistent under partial edits
///
/// Owns the triple exclusively; callers must deliver events serially
/// (one per keystroke/commit, in order). All processing is synchronous.
#[derive(Debug)]
pub struct DerivationEngine {
    average_price: FieldState,
    quantity: FieldState,
    total_price: FieldState,
    /// Which of quantity/total price the user touched most recently. When
    /// average price changes while both hold valid values, the counterpart
    /// of this field is the one recomputed. Engine writes never update it.
    recent_edit: FieldId,
    state: EngineState,
}

impl DerivationEngine {
    pub fn new() -> Self {
        Self {
            average_price: FieldState::default(),
            quantity: FieldState::default(),
            total_price: FieldState::default(),
            recent_edit: FieldId::Quantity,
            state: EngineState::Idle,
        }
    }

    /// Pre-fill the triple from a stored holding
    ///
    /// The writes are engine-originated: they do not count as user edits.
    /// Returns the display text for all three fields so the caller can
    /// render the seeded state.
    pub fn seed(&mut self, average_price: Decimal, quantity: Decimal) -> Vec<FieldUpdate> {
        self.average_price.set_text(&numeric::format(average_price));
        self.quantity.set_text(&numeric::format(quantity));
        match (self.average_price.driving(), self.quantity.driving()) {
            (Some(avg), Some(qty)) => {
                if let Some(total) = StockCalculator::total_price(avg, qty) {
                    self.total_price.set_text(&numeric::format(total));
                }
            }
            _ => self.total_price.clear(),
        }
        [FieldId::AveragePrice, FieldId::Quantity, FieldId::TotalPrice]
            .into_iter()
            .map(|id| FieldUpdate::new(id, self.field(id).text()))
            .collect()
    }

    /// Process one user edit, returning the resulting derived or cleared
    /// field update, if any
    pub fn apply(&mut self, event: &ChangeEvent) -> Option<FieldUpdate> {
        debug!(field = %event.field, text = %event.text, "change event");
        self.field_mut(event.field).set_text(&event.text);
        if event.field != FieldId::AveragePrice {
            self.recent_edit = event.field;
        }

        // The recompute target is never the field the user just touched,
        // and never average price.
        let target = match event.field {
            FieldId::Quantity => FieldId::TotalPrice,
            FieldId::TotalPrice => FieldId::Quantity,
            FieldId::AveragePrice => match self.recent_edit {
                FieldId::TotalPrice => FieldId::Quantity,
                _ => FieldId::TotalPrice,
            },
        };
        self.rederive(target)
    }

    /// Current state of one field
    pub fn field(&self, id: FieldId) -> &FieldState {
        match id {
            FieldId::AveragePrice => &self.average_price,
            FieldId::Quantity => &self.quantity,
            FieldId::TotalPrice => &self.total_price,
        }
    }

    /// Outcome of the last processed event
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Drain change events until the channel closes, pushing resulting
    /// updates back to the view layer
    ///
    /// The channel serializes delivery; each event is processed to
    /// completion before the next is received.
    pub fn run(&mut self, changes: &Receiver<ChangeEvent>, updates: &Sender<FieldUpdate>) {
        for event in changes.iter() {
            if let Some(update) = self.apply(&event) {
                if updates.send(update).is_err() {
                    break;
                }
            }
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        match id {
            FieldId::AveragePrice => &mut self.average_price,
            FieldId::Quantity => &mut self.quantity,
            FieldId::TotalPrice => &mut self.total_price,
        }
    }

    fn rederive(&mut self, target: FieldId) -> Option<FieldUpdate> {
        let derived = match target {
            FieldId::TotalPrice => match (self.average_price.driving(), self.quantity.driving()) {
                (Some(avg), Some(qty)) => StockCalculator::total_price(avg, qty),
                _ => None,
            },
            FieldId::Quantity => match (self.average_price.driving(), self.total_price.driving()) {
                (Some(avg), Some(total)) => StockCalculator::quantity(avg, total),
                _ => None,
            },
            // Average price is always a driving field
            FieldId::AveragePrice => None,
        };

        match derived {
            Some(value) => {
                let text = numeric::format(value);
                debug!(field = %target, %value, "derived");
                // Engine-originated write: updates field state without
                // touching recent_edit, so it cannot re-arm derivation of
                // its own sources.
                self.field_mut(target).set_text(&text);
                self.state = EngineState::Deriving;
                Some(FieldUpdate::new(target, text))
            }
            None if !self.field(target).text().is_empty() => {
                debug!(field = %target, "driver invalid, clearing");
                self.field_mut(target).clear();
                self.state = EngineState::Cleared;
                Some(FieldUpdate::new(target, ""))
            }
            None => {
                self.state = EngineState::Idle;
                None
            }
        }
    }
}

impl Default for DerivationEngine {
    fn default() -> Self {
        Self::new()
    }
}
