//! Free-text search and read-status filtering.

use crate::message::Message;

/// Read-status filter applied to a candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Keep every message.
    #[default]
    All,
    /// Keep messages not yet opened.
    Unread,
    /// Keep messages already opened.
    Read,
}

impl StatusFilter {
    /// Parses a filter toggle value.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "unread" => Self::Unread,
            "read" => Self::Read,
            _ => Self::All,
        }
    }

    /// Returns the lowercase toggle value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Unread => "unread",
            Self::Read => "read",
        }
    }

    /// Returns true if the message passes this filter.
    #[must_use]
    pub const fn keeps(&self, message: &Message) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !message.read,
            Self::Read => message.read,
        }
    }
}

/// Returns true if the query appears in the subject, sender name, or preview.
///
/// `needle` must already be lowercased; callers lowercase once per filter
/// pass, not once per message.
fn matches_query(message: &Message, needle: &str) -> bool {
    message.subject.to_lowercase().contains(needle)
        || message.sender.name.to_lowercase().contains(needle)
        || message.preview.to_lowercase().contains(needle)
}

/// Applies the status and free-text filters to a candidate set.
///
/// The query is a case-insensitive substring match over subject, sender name,
/// and preview; an empty or whitespace-only query keeps everything. Both
/// filters are pure per-message predicates: no ranking, no limit, no
/// pagination. Relative order of survivors is unchanged.
#[must_use]
pub fn apply_filters(messages: &[Message], query: &str, status: StatusFilter) -> Vec<Message> {
    let needle = query.trim().to_lowercase();
    messages
        .iter()
        .filter(|m| status.keeps(m))
        .filter(|m| needle.is_empty() || matches_query(m, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{AiAnalysis, AiCategory, MessageId, Sender, Sentiment, SystemFolder};
    use chrono::Utc;

    fn sample(id: &str, subject: &str, sender_name: &str, preview: &str, read: bool) -> Message {
        Message {
            id: MessageId::new(id),
            sender: Sender::new(sender_name, "test@example.com"),
            subject: subject.into(),
            preview: preview.into(),
            body: "body text never searched".into(),
            date: Utc::now(),
            read,
            folder: SystemFolder::Inbox,
            labels: Vec::new(),
            ai_analysis: AiAnalysis {
                category: AiCategory::Work,
                sentiment: Sentiment::Neutral,
                summary: String::new(),
                suggested_actions: Vec::new(),
            },
        }
    }

    fn fixture() -> Vec<Message> {
        vec![
            sample("a", "Q2 Roadmap", "Sarah Chen", "review by EOD", false),
            sample("b", "Invoice #3492", "Stripe", "payment successful", true),
            sample("c", "Weekend Plans?", "Mom", "famous lasagna", true),
        ]
    }

    mod status_filter_tests {
        use super::*;

        #[test]
        fn parse_falls_back_to_all() {
            assert_eq!(StatusFilter::parse("unread"), StatusFilter::Unread);
            assert_eq!(StatusFilter::parse("read"), StatusFilter::Read);
            assert_eq!(StatusFilter::parse("anything"), StatusFilter::All);
        }

        #[test]
        fn unread_keeps_only_unread() {
            let kept = apply_filters(&fixture(), "", StatusFilter::Unread);
            assert_eq!(kept.len(), 1);
            assert_eq!(kept[0].id.as_str(), "a");
        }

        #[test]
        fn read_keeps_only_read() {
            let kept = apply_filters(&fixture(), "", StatusFilter::Read);
            assert_eq!(kept.len(), 2);
        }
    }

    mod query_tests {
        use super::*;

        #[test]
        fn empty_query_and_all_status_is_identity() {
            let input = fixture();
            assert_eq!(apply_filters(&input, "", StatusFilter::All), input);
        }

        #[test]
        fn whitespace_query_is_identity() {
            let input = fixture();
            assert_eq!(apply_filters(&input, "   ", StatusFilter::All), input);
        }

        #[test]
        fn query_is_case_insensitive_over_sender_name() {
            let kept = apply_filters(&fixture(), "sarah", StatusFilter::All);
            assert_eq!(kept.len(), 1);
            assert_eq!(kept[0].sender.name, "Sarah Chen");

            let kept = apply_filters(&fixture(), "SARAH", StatusFilter::All);
            assert_eq!(kept.len(), 1);
        }

        #[test]
        fn query_matches_subject_and_preview() {
            assert_eq!(apply_filters(&fixture(), "invoice", StatusFilter::All).len(), 1);
            assert_eq!(apply_filters(&fixture(), "lasagna", StatusFilter::All).len(), 1);
        }

        #[test]
        fn body_is_not_searched() {
            assert!(apply_filters(&fixture(), "never searched", StatusFilter::All).is_empty());
        }

        #[test]
        fn filters_compose_as_conjunction() {
            // "sarah" matches an unread message; demanding read yields nothing.
            assert!(apply_filters(&fixture(), "sarah", StatusFilter::Read).is_empty());
            assert_eq!(apply_filters(&fixture(), "sarah", StatusFilter::Unread).len(), 1);
        }

        #[test]
        fn filtering_is_idempotent() {
            let once = apply_filters(&fixture(), "a", StatusFilter::Read);
            let twice = apply_filters(&once, "a", StatusFilter::Read);
            assert_eq!(once, twice);
        }
    }
}
