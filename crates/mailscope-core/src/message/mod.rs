//! Message data model and seed fixture.
//!
//! A message is immutable after seeding except for its `read` flag. It lives
//! in exactly one system folder, carries zero or more user labels, and has
//! exactly one AI category - three independent axes of classification:
//!
//! - **Folder**: a partition (inbox, sent, drafts, trash, spam).
//! - **Labels**: a covering, possibly-overlapping set of free-text tags.
//! - **Category**: a single AI-assigned bucket, distinct from both.

mod fixture;
mod model;

pub use fixture::mock_messages;
pub use model::{AiAnalysis, AiCategory, Message, MessageId, Sender, Sentiment, SystemFolder};
