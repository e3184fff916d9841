//! # mailscope-core
//!
//! Message store and list view-model for the Mailscope mail client.
//!
//! This crate provides:
//! - Message data model - folders, labels, AI annotations
//! - **Message Store** - the seeded, observable message list
//! - **View classification** - system folders vs. label/category views
//! - **Search & status filtering** - pure per-message predicates
//! - **Recency sort and unread counts** - what the list and badges render
//!
//! The presentation layer (routing, widgets, styling) lives elsewhere and
//! consumes this crate through [`MessageStore`], [`view::list_view`], and
//! [`view::count_unread`]. Navigation hands in opaque strings; [`view::ViewId`]
//! decides at that boundary whether a string names a folder or a tag view.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod message;
pub mod store;
pub mod view;

pub use message::{
    AiAnalysis, AiCategory, Message, MessageId, Sender, Sentiment, SystemFolder, mock_messages,
};
pub use store::{MessageStore, StoreEvent};
pub use view::{StatusFilter, ViewId, apply_filters, count_unread, list_view, sort_by_recency};
