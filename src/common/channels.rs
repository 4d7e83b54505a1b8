//! Channel type definitions for view-to-engine communication
//!
//! The engine itself is synchronous; these bounded channels only carry the
//! serialized stream of edits from the view layer and the formatted
//! updates going back.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::types::{ChangeEvent, FieldUpdate};

/// Default channel buffer size
pub const DEFAULT_CHANNEL_SIZE: usize = 64;

/// Create a new change-event channel with the default buffer size
pub fn create_change_channel() -> (Sender<ChangeEvent>, Receiver<ChangeEvent>) {
    bounded(DEFAULT_CHANNEL_SIZE)
}

/// Create a new field-update channel with the default buffer size
pub fn create_update_channel() -> (Sender<FieldUpdate>, Receiver<FieldUpdate>) {
    bounded(DEFAULT_CHANNEL_SIZE)
}
