//! Per-folder unread counts for badge display.

use crate::message::{Message, SystemFolder};

/// Counts unread messages in the given system folder.
///
/// Defined only over the five system folders; label and category views carry
/// no badges. Total for any input: an empty or fully-read folder counts zero.
#[must_use]
pub fn count_unread(messages: &[Message], folder: SystemFolder) -> usize {
    messages
        .iter()
        .filter(|m| m.folder == folder && !m.read)
        .count()
}
