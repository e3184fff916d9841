//! Seed data for demo and test sessions.
//!
//! There is no real mailbox behind this crate; a session starts from this
//! fixed set of messages and resets on reload.

use chrono::{Duration, Utc};

use super::model::{AiAnalysis, AiCategory, Message, MessageId, Sender, Sentiment, SystemFolder};

#[allow(clippy::too_many_arguments)]
fn message(
    id: &str,
    sender: Sender,
    subject: &str,
    preview: &str,
    body: &str,
    age: Duration,
    read: bool,
    folder: SystemFolder,
    labels: &[&str],
    analysis: AiAnalysis,
) -> Message {
    Message {
        id: MessageId::new(id),
        sender,
        subject: subject.into(),
        preview: preview.into(),
        body: body.into(),
        date: Utc::now() - age,
        read,
        folder,
        labels: labels.iter().map(|&l| l.into()).collect(),
        ai_analysis: analysis,
    }
}

fn analysis(
    category: AiCategory,
    sentiment: Sentiment,
    summary: &str,
    actions: &[&str],
) -> AiAnalysis {
    AiAnalysis {
        category,
        sentiment,
        summary: summary.into(),
        suggested_actions: actions.iter().map(|&a| a.into()).collect(),
    }
}

/// Returns the eight seed messages, in insertion order.
///
/// Dates are relative to the moment of the call so the list always reads
/// like a live mailbox (30 minutes ago, 2 hours ago, and so on).
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn mock_messages() -> Vec<Message> {
    vec![
        message(
            "email_001",
            Sender::with_avatar(
                "Sarah Chen",
                "sarah.chen@techcorp.com",
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80&w=150",
            ),
            "Q2 Product Roadmap Review - Urgent",
            "Hi team, I need everyone to review the attached Q2 roadmap by EOD...",
            "<p>Hi team,</p>\
             <p>I need everyone to review the attached Q2 roadmap by EOD tomorrow. \
             We have a board meeting on Friday and I want to make sure all departmental goals are aligned.</p>\
             <ul><li>Timeline feasibility</li><li>Resource allocation</li><li>Key deliverables</li></ul>\
             <p>Best,<br>Sarah</p>",
            Duration::minutes(30),
            false,
            SystemFolder::Inbox,
            &["Work", "Q2 Planning"],
            analysis(
                AiCategory::Urgent,
                Sentiment::Neutral,
                "Request for Q2 roadmap review by EOD tomorrow, focusing on timelines and resources.",
                &[
                    "Draft response acknowledging receipt",
                    "Schedule time to review roadmap",
                    "Forward to engineering lead",
                ],
            ),
        ),
        message(
            "email_002",
            Sender::with_avatar(
                "Alex Rivera",
                "alex.rivera@designstudio.io",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=150",
            ),
            "New Design Mockups for Dashboard",
            "Hey! Here are the updated mockups based on yesterday's feedback...",
            "<p>Hey!</p>\
             <p>Here are the updated mockups based on yesterday's feedback. I've adjusted the color \
             palette to be more accessible and cleaned up the navigation hierarchy.</p>\
             <p>The Figma link is attached below. Let me know what you think!</p>\
             <p>Cheers,<br>Alex</p>",
            Duration::hours(2),
            true,
            SystemFolder::Inbox,
            &["Design", "Project X"],
            analysis(
                AiCategory::Work,
                Sentiment::Positive,
                "Updated dashboard mockups with accessibility improvements ready for review.",
                &["Open Figma link", "Reply with feedback", "Schedule design review meeting"],
            ),
        ),
        message(
            "email_003",
            Sender::new("Stripe", "notifications@stripe.com"),
            "Invoice #3492-01 payment successful",
            "Your payment of $29.00 for Pro Plan was successful.",
            "<p>Hi there,</p>\
             <p>This is a confirmation that your payment of <strong>$29.00</strong> for the Pro Plan \
             was successful.</p>\
             <p>You can view your invoice and payment history in your dashboard.</p>\
             <p>Thanks for your business!</p>",
            Duration::hours(5),
            false,
            SystemFolder::Inbox,
            &["Finance", "Receipts"],
            analysis(
                AiCategory::Finance,
                Sentiment::Neutral,
                "Payment confirmation for $29.00 Pro Plan subscription.",
                &["Download invoice", "Archive email"],
            ),
        ),
        message(
            "email_004",
            Sender::new("Mom", "p.davis55@gmail.com"),
            "Weekend Plans?",
            "Are you coming home this weekend? Dad is making his famous lasagna...",
            "<p>Hi honey,</p>\
             <p>Are you coming home this weekend? Dad is making his famous lasagna on Saturday night \
             and we'd love to see you.</p>\
             <p>Let me know so I can get the groceries!</p>\
             <p>Love,<br>Mom</p>",
            Duration::hours(24),
            true,
            SystemFolder::Inbox,
            &["Personal", "Family"],
            analysis(
                AiCategory::Personal,
                Sentiment::Positive,
                "Invitation to visit home this weekend for dinner.",
                &[
                    "Reply \"Yes, I'll be there\"",
                    "Reply \"Sorry, I can't make it\"",
                    "Call Mom",
                ],
            ),
        ),
        message(
            "email_005",
            Sender::new("LinkedIn Job Alerts", "jobs-listings@linkedin.com"),
            "30+ new jobs match your preferences",
            "Senior Frontend Engineer at Google, UX Designer at Apple...",
            "<p>Here are the latest jobs matching your preferences:</p>\
             <ul><li><strong>Senior Frontend Engineer</strong> - Google</li>\
             <li><strong>UX Designer</strong> - Apple</li>\
             <li><strong>Product Manager</strong> - Linear</li></ul>\
             <p>Click to apply now.</p>",
            Duration::hours(48),
            true,
            SystemFolder::Inbox,
            &["Social", "Careers"],
            analysis(
                AiCategory::Promotions,
                Sentiment::Neutral,
                "Job alert listing new opportunities at major tech companies.",
                &["View all jobs", "Update job preferences", "Unsubscribe"],
            ),
        ),
        message(
            "email_006",
            Sender::new("AWS Billing", "no-reply-aws@amazon.com"),
            "AWS Budget Alert: Monthly Budget Exceeded",
            "Your account 123456789012 has exceeded your monthly budget of $100.00...",
            "<p>Hello,</p>\
             <p>Your AWS account 123456789012 has exceeded your monthly budget of $100.00. \
             The current forecast is $150.00.</p>\
             <p>Please review your usage immediately to avoid unexpected charges.</p>",
            Duration::hours(3),
            false,
            SystemFolder::Inbox,
            &["Finance", "Work"],
            analysis(
                AiCategory::Urgent,
                Sentiment::Negative,
                "AWS budget alert: $100 limit exceeded, forecast $150.",
                &["Log in to AWS Console", "Check EC2 instances", "Forward to DevOps"],
            ),
        ),
        message(
            "email_007",
            Sender::new("David Kim", "david.kim@startup.com"),
            "Re: Partnership Proposal",
            "Thanks for sending this over. We are interested but have a few questions...",
            "<p>Hi,</p>\
             <p>Thanks for sending this over. We are interested in the partnership proposal but have \
             a few questions about the revenue sharing model.</p>\
             <p>Can we jump on a quick call next Tuesday to discuss?</p>\
             <p>Best,<br>David</p>",
            Duration::hours(72),
            true,
            SystemFolder::Sent,
            &["Work", "Partnership"],
            analysis(
                AiCategory::Work,
                Sentiment::Positive,
                "Expressed interest in partnership, requested call next Tuesday to discuss revenue share.",
                &["Schedule call", "Prepare revenue share details"],
            ),
        ),
        message(
            "email_008",
            Sender::new("Draft: Marketing Team", "marketing@techcorp.com"),
            "Q3 Marketing Strategy Brainstorm",
            "Hi everyone, I wanted to get a head start on Q3...",
            "<p>Hi everyone,</p>\
             <p>I wanted to get a head start on Q3 marketing strategy. Here are some initial thoughts:</p>\
             <ul><li>Focus on organic growth</li><li>Revamp the blog</li></ul>\
             <p>Let's discuss next week.</p>",
            Duration::hours(12),
            true,
            SystemFolder::Drafts,
            &["Work", "Marketing", "Strategy"],
            analysis(
                AiCategory::Work,
                Sentiment::Neutral,
                "Draft email about Q3 marketing strategy brainstorming.",
                &["Finish draft", "Discard draft"],
            ),
        ),
    ]
}
