//! Message storage with change notification.
//!
//! The store is seeded once at session start and owns the only mutable
//! message list in the system. Reads hand out clones; the single mutation,
//! [`MessageStore::mark_read`], flips a message's `read` flag and notifies
//! subscribers so list and badge views re-render.

mod repository;

pub use repository::{MessageStore, StoreEvent};
