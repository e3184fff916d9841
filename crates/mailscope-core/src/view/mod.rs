//! The list view-model: classification, filtering, and ordering.
//!
//! The presentation layer calls one entry point per render, [`list_view`],
//! which composes the pipeline:
//!
//! 1. [`matches_view`] - does the message belong in the requested view?
//! 2. [`apply_filters`] - read-status and free-text query predicates.
//! 3. [`sort_by_recency`] - most-recent-first, stable on ties.
//!
//! Everything here is synchronous and pure: total functions over well-typed
//! enums that never suspend and never fail for valid input.

mod classify;
mod filter;
mod sort;
mod unread;

pub use classify::{ViewId, matches_view};
pub use filter::{StatusFilter, apply_filters};
pub use sort::sort_by_recency;
pub use unread::count_unread;

use crate::message::Message;

/// Produces the ordered message sequence for one rendered list.
///
/// A message survives only if it matches the view, passes the status filter,
/// and passes the query filter - a conjunction. Filtering runs before the
/// recency sort; the result is what the list view renders top to bottom.
#[must_use]
pub fn list_view(
    messages: &[Message],
    view: &ViewId,
    status: StatusFilter,
    query: &str,
) -> Vec<Message> {
    let candidates: Vec<Message> = messages
        .iter()
        .filter(|m| matches_view(m, view))
        .cloned()
        .collect();
    sort_by_recency(apply_filters(&candidates, query, status))
}
