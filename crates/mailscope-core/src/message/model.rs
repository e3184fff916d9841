//! Message data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a message.
///
/// Opaque and stable for the message's lifetime; uniqueness across the
/// store is a seeding invariant, not something this type enforces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Creates a message id from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display identity of a message sender.
///
/// No address validation is performed; the fields are display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Optional avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Sender {
    /// Creates a sender without an avatar.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    /// Creates a sender with an avatar URL.
    #[must_use]
    pub fn with_avatar(
        name: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: Some(avatar.into()),
        }
    }
}

/// One of the five mutually-exclusive system folders.
///
/// Every message lives in exactly one system folder, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemFolder {
    /// Incoming mail.
    Inbox,
    /// Sent mail.
    Sent,
    /// Unsent drafts.
    Drafts,
    /// Deleted mail.
    Trash,
    /// Junk mail.
    Spam,
}

impl SystemFolder {
    /// All five system folders, in sidebar display order.
    pub const ALL: [Self; 5] = [
        Self::Inbox,
        Self::Sent,
        Self::Drafts,
        Self::Spam,
        Self::Trash,
    ];

    /// Parses a route name into a system folder.
    ///
    /// The match is exact and case-sensitive: only the five lowercase route
    /// names qualify. Anything else (including `"Inbox"`) is not a system
    /// folder and falls through to label/category view matching.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "inbox" => Some(Self::Inbox),
            "sent" => Some(Self::Sent),
            "drafts" => Some(Self::Drafts),
            "trash" => Some(Self::Trash),
            "spam" => Some(Self::Spam),
            _ => None,
        }
    }

    /// Returns the lowercase route name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Drafts => "drafts",
            Self::Trash => "trash",
            Self::Spam => "spam",
        }
    }
}

impl std::fmt::Display for SystemFolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// AI-assigned message category.
///
/// Exactly one per message, distinct from both the system folder and the
/// user labels. Category views overlap freely with label views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiCategory {
    /// Work correspondence.
    Work,
    /// Personal correspondence.
    Personal,
    /// Bills, invoices, payment notices.
    Finance,
    /// Social-network notifications.
    Social,
    /// Marketing and promotional mail.
    Promotions,
    /// Anything needing immediate attention.
    Urgent,
}

impl AiCategory {
    /// Parses a capitalized category name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Work" => Some(Self::Work),
            "Personal" => Some(Self::Personal),
            "Finance" => Some(Self::Finance),
            "Social" => Some(Self::Social),
            "Promotions" => Some(Self::Promotions),
            "Urgent" => Some(Self::Urgent),
            _ => None,
        }
    }

    /// Returns the capitalized route/display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Finance => "Finance",
            Self::Social => "Social",
            Self::Promotions => "Promotions",
            Self::Urgent => "Urgent",
        }
    }
}

impl std::fmt::Display for AiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// AI-assessed tone of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Positive tone.
    Positive,
    /// Neutral tone.
    #[default]
    Neutral,
    /// Negative tone.
    Negative,
}

impl Sentiment {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

/// AI annotation attached to a message at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    /// Assigned category.
    pub category: AiCategory,
    /// Assessed tone.
    pub sentiment: Sentiment,
    /// One-sentence summary of the message.
    pub summary: String,
    /// Suggested follow-up actions, in display order.
    pub suggested_actions: Vec<String>,
}

/// A single email message.
///
/// Immutable after seeding except for the `read` flag, which only the
/// store's `mark_read` may flip (false to true, never back).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier.
    pub id: MessageId,
    /// Sender identity.
    pub sender: Sender,
    /// Subject line.
    pub subject: String,
    /// Short text for the list view.
    pub preview: String,
    /// Full content; may contain markup rendered verbatim downstream.
    pub body: String,
    /// Timestamp used for recency sort and relative-time display.
    pub date: DateTime<Utc>,
    /// Whether the message has been opened.
    pub read: bool,
    /// System folder containing this message.
    pub folder: SystemFolder,
    /// User-assigned free-text tags; order matters for display only.
    pub labels: Vec<String>,
    /// Attached AI annotation.
    pub ai_analysis: AiAnalysis,
}

impl Message {
    /// Returns true if the message carries the given label.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}
