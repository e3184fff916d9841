//! Recency ordering.

use crate::message::Message;

/// Orders messages most-recent-first.
///
/// The sort is stable, so messages with equal timestamps keep their store
/// insertion order. Applied after filtering, as the final step before
/// rendering.
#[must_use]
pub fn sort_by_recency(mut messages: Vec<Message>) -> Vec<Message> {
    messages.sort_by(|a, b| b.date.cmp(&a.date));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{AiAnalysis, AiCategory, MessageId, Sender, Sentiment, SystemFolder};
    use chrono::{DateTime, Duration, Utc};
    use proptest::prelude::*;

    fn dated(id: &str, date: DateTime<Utc>) -> Message {
        Message {
            id: MessageId::new(id),
            sender: Sender::new("Test", "test@example.com"),
            subject: "subject".into(),
            preview: "preview".into(),
            body: "body".into(),
            date,
            read: false,
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

    #[test]
    fn most_recent_first() {
        let now = Utc::now();
        let sorted = sort_by_recency(vec![
            dated("old", now - Duration::hours(5)),
            dated("new", now),
            dated("mid", now - Duration::hours(1)),
        ]);
        let ids: Vec<_> = sorted.iter().map(|m| m.id.as_str().to_owned()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        let now = Utc::now();
        let sorted = sort_by_recency(vec![dated("first", now), dated("second", now)]);
        assert_eq!(sorted[0].id.as_str(), "first");
        assert_eq!(sorted[1].id.as_str(), "second");
    }

    proptest! {
        #[test]
        fn dates_are_non_increasing(offsets in proptest::collection::vec(0i64..1_000_000, 0..32)) {
            let base = Utc::now();
            let input: Vec<_> = offsets
                .iter()
                .enumerate()
                .map(|(i, &secs)| dated(&format!("m{i}"), base - Duration::seconds(secs)))
                .collect();
            let sorted = sort_by_recency(input.clone());
            prop_assert_eq!(sorted.len(), input.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].date >= pair[1].date);
            }
        }
    }
}
