//! View identification and membership.

use crate::message::{Message, SystemFolder};

/// A requested slice of the message list.
///
/// The router hands the core a single opaque string; this type decides once,
/// at that boundary, whether it names a system folder or a label/category
/// view. System folders partition the store (each message in exactly one),
/// while label/category views form a covering, possibly-overlapping
/// classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewId {
    /// One of the five mutually-exclusive system folders.
    Folder(SystemFolder),
    /// A user label or AI category name.
    Tag(String),
}

impl ViewId {
    /// Classifies a raw navigation parameter.
    ///
    /// Exactly the five lowercase folder route names become [`ViewId::Folder`];
    /// every other string is a [`ViewId::Tag`], with no validation beyond that.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        SystemFolder::parse(raw).map_or_else(|| Self::Tag(raw.to_string()), Self::Folder)
    }

    /// Returns the route name for this view.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Folder(folder) => folder.as_str(),
            Self::Tag(tag) => tag,
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<SystemFolder> for ViewId {
    fn from(folder: SystemFolder) -> Self {
        Self::Folder(folder)
    }
}

/// Decides whether a message belongs in the given view.
///
/// Folder views match on the `folder` field alone: a label whose text happens
/// to equal a folder name never pulls a message into that folder. Tag views
/// match any of the message's labels or its AI category, so a message can
/// appear under several tag views at once.
#[must_use]
pub fn matches_view(message: &Message, view: &ViewId) -> bool {
    match view {
        ViewId::Folder(folder) => message.folder == *folder,
        ViewId::Tag(tag) => message.has_label(tag) || message.ai_analysis.category.as_str() == tag,
    }
}
