//! Message store implementation.

use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::message::{Message, MessageId, mock_messages};

/// Change notification emitted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A message transitioned from unread to read.
    MarkedRead {
        /// Id of the message that was opened.
        id: MessageId,
    },
}

type Listener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

/// Exclusive owner of the mutable message list.
///
/// Every other component gets clones out of `all`/`get` and never a mutable
/// reference; the only mutation path is [`MessageStore::mark_read`], which
/// notifies subscribers so dependent views re-render.
pub struct MessageStore {
    messages: RwLock<Vec<Message>>,
    listeners: RwLock<Vec<Listener>>,
}

impl MessageStore {
    /// Creates a store seeded with the given messages.
    ///
    /// Seeding happens once per session; the UI never creates or deletes
    /// messages afterwards.
    #[must_use]
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages: RwLock::new(messages),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store seeded from the demo fixture.
    #[must_use]
    pub fn with_mock_data() -> Self {
        Self::new(mock_messages())
    }

    /// Returns the current full message set, seed insertion order preserved.
    #[must_use]
    pub fn all(&self) -> Vec<Message> {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Looks up a single message by id.
    ///
    /// `None` is the "not found" presentational state, not an error.
    #[must_use]
    pub fn get(&self, id: &MessageId) -> Option<Message> {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|m| &m.id == id)
            .cloned()
    }

    /// Number of messages in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if the store holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Marks the message with the given id as read.
    ///
    /// Idempotent and one-directional: a second call on the same id changes
    /// nothing, and there is no way back to unread. An unknown id is a
    /// silent no-op. Subscribers are notified only on an actual
    /// unread-to-read transition, so repeated opens do not trigger spurious
    /// re-renders.
    pub fn mark_read(&self, id: &MessageId) {
        let flipped = {
            let mut messages = self
                .messages
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            match messages.iter_mut().find(|m| &m.id == id) {
                Some(message) if !message.read => {
                    message.read = true;
                    true
                }
                Some(_) => false,
                None => {
                    debug!(id = %id, "mark_read: no such message");
                    false
                }
            }
        };

        if flipped {
            debug!(id = %id, "message marked read");
            self.notify(&StoreEvent::MarkedRead { id: id.clone() });
        }
    }

    /// Registers a listener for store change events.
    ///
    /// Listeners stay registered for the lifetime of the store.
    pub fn subscribe(&self, listener: impl Fn(&StoreEvent) + Send + Sync + 'static) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }

    fn notify(&self, event: &StoreEvent) {
        let listeners = self.listeners.read().unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(event);
        }
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::with_mock_data()
    }
}

impl std::fmt::Debug for MessageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageStore")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
