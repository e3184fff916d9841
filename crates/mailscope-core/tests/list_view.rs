//! End-to-end view-model scenarios: store seeding, navigation, filtering,
//! and read-state transitions composed the way the list view drives them.

#![allow(clippy::unwrap_used)]

use chrono::{Duration, Utc};
use mailscope_core::{
    AiAnalysis, AiCategory, Message, MessageId, MessageStore, Sender, Sentiment, StatusFilter,
    SystemFolder, ViewId, count_unread, list_view,
};

fn seeded(id: &str, folder: SystemFolder, read: bool, age_minutes: i64) -> Message {
    Message {
        id: MessageId::new(id),
        sender: Sender::new("Test Sender", "sender@example.com"),
        subject: format!("Subject {id}"),
        preview: format!("Preview {id}"),
        body: String::new(),
        date: Utc::now() - Duration::minutes(age_minutes),
        read,
        folder,
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
fn unread_inbox_view_reacts_to_mark_read() {
    // A is unread and older, B is read and newer.
    let a = seeded("a", SystemFolder::Inbox, false, 10);
    let b = seeded("b", SystemFolder::Inbox, true, 5);
    let store = MessageStore::new(vec![a.clone(), b]);

    let inbox = ViewId::parse("inbox");
    let unread = list_view(&store.all(), &inbox, StatusFilter::Unread, "");
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].id, a.id);

    store.mark_read(&a.id);
    let unread = list_view(&store.all(), &inbox, StatusFilter::Unread, "");
    assert!(unread.is_empty());
}

#[test]
fn message_appears_under_label_and_category_views() {
    let mut c = seeded("c", SystemFolder::Inbox, false, 1);
    c.labels = vec!["Work".into()];
    c.ai_analysis.category = AiCategory::Finance;
    let store = MessageStore::new(vec![c.clone()]);

    for view in ["Work", "Finance"] {
        let listed = list_view(&store.all(), &ViewId::parse(view), StatusFilter::All, "");
        assert_eq!(listed.len(), 1, "expected c under {view}");
        assert_eq!(listed[0].id, c.id);
    }
    let listed = list_view(&store.all(), &ViewId::parse("Personal"), StatusFilter::All, "");
    assert!(listed.is_empty());
}

#[test]
fn search_is_case_insensitive_over_sender_name() {
    let store = MessageStore::with_mock_data();
    let inbox = ViewId::parse("inbox");

    let hits = list_view(&store.all(), &inbox, StatusFilter::All, "sarah");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].sender.name, "Sarah Chen");

    let misses = list_view(&store.all(), &inbox, StatusFilter::All, "no such text anywhere");
    assert!(misses.is_empty());
}

#[test]
fn fixture_inbox_renders_newest_first() {
    let store = MessageStore::with_mock_data();
    let listed = list_view(&store.all(), &ViewId::parse("inbox"), StatusFilter::All, "");

    assert_eq!(listed.len(), 6);
    for pair in listed.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }
    // email_001 (30 minutes old) leads the fixture inbox.
    assert_eq!(listed[0].id.as_str(), "email_001");
}

#[test]
fn badges_follow_the_store() {
    let store = MessageStore::with_mock_data();
    assert_eq!(count_unread(&store.all(), SystemFolder::Inbox), 3);
    assert_eq!(count_unread(&store.all(), SystemFolder::Sent), 0);

    store.mark_read(&MessageId::new("email_001"));
    assert_eq!(count_unread(&store.all(), SystemFolder::Inbox), 2);
}

#[test]
fn identity_filter_returns_the_folder_slice_unchanged_in_count() {
    let store = MessageStore::with_mock_data();
    let all = store.all();
    let everything: usize = SystemFolder::ALL
        .iter()
        .map(|&f| list_view(&all, &ViewId::Folder(f), StatusFilter::All, "").len())
        .sum();
    // Folders partition the store: each message is listed exactly once.
    assert_eq!(everything, all.len());
}
