// 示例会话历史（联系人 1-3）

use chrono::{DateTime, Duration, Utc};

use crate::modules::chat::domain::{
    Attachment, AttachmentId, AttachmentKind, Message, SenderId,
};
use crate::modules::directory::CounterpartId;

/// 示例附件的占位链接
const PLACEHOLDER_REF: &str = "#";

fn from_counterpart(
    id: &CounterpartId,
    content: &str,
    attachments: Vec<Attachment>,
    at: DateTime<Utc>,
) -> Message {
    Message::restore(SenderId::counterpart(id), content, attachments, at)
}

fn from_current_user(content: &str, at: DateTime<Utc>) -> Message {
    Message::restore(SenderId::current_user(), content, Vec::new(), at)
}

fn file(id: &str, name: &str, size_label: &str) -> Attachment {
    Attachment::with_id(
        AttachmentId::from_raw(id),
        AttachmentKind::File,
        PLACEHOLDER_REF,
        name,
        Some(size_label.to_string()),
    )
}

pub fn sample_conversations() -> Vec<(CounterpartId, Vec<Message>)> {
    let now = Utc::now();
    let sarah = CounterpartId::from("1");
    let michael = CounterpartId::from("2");
    let jessica = CounterpartId::from("3");

    let design_mockup = Attachment::with_id(
        AttachmentId::from_raw("a1"),
        AttachmentKind::Image,
        "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&auto=format&fit=crop&q=80",
        "design-mockup.jpg",
        None,
    );

    let sarah_timeline = vec![
        from_counterpart(
            &sarah,
            "Hi there! Could you take a look at the design mockups I sent over yesterday?",
            Vec::new(),
            now - Duration::minutes(30),
        ),
        from_current_user("Sure, I'll review them today.", now - Duration::minutes(25)),
        from_counterpart(
            &sarah,
            "Great! I particularly need feedback on the color scheme and typography.",
            vec![design_mockup],
            now - Duration::minutes(20),
        ),
        from_current_user(
            "I like the overall direction. The typography works well with the brand. I'd suggest making the primary CTA buttons a bit more prominent.",
            now - Duration::minutes(15),
        ),
        from_counterpart(
            &sarah,
            "That makes sense. I'll increase the contrast and size slightly. Here's the updated file:",
            vec![file("a2", "Updated-Design-V2.pdf", "4.2 MB")],
            now - Duration::minutes(10),
        ),
    ];

    let michael_timeline = vec![
        from_counterpart(
            &michael,
            "The client report is ready. I've included all the performance metrics we discussed.",
            vec![file("a3", "Q2-Performance-Report.pdf", "2.8 MB")],
            now - Duration::hours(5),
        ),
        from_current_user(
            "Thanks Michael. Did you address the concerns they raised in the last meeting?",
            now - Duration::hours(4),
        ),
        from_counterpart(
            &michael,
            "Yes, there's a dedicated section on page 5 that directly addresses those points with the updated metrics.",
            Vec::new(),
            now - Duration::hours(3),
        ),
    ];

    let two_days_ago = now - Duration::days(2);
    let jessica_timeline = vec![
        from_counterpart(
            &jessica,
            "The marketing team needs to reschedule tomorrow's meeting. Are you available on Friday instead?",
            Vec::new(),
            two_days_ago,
        ),
        from_current_user(
            "Friday works for me. Same time?",
            two_days_ago + Duration::minutes(15),
        ),
        from_counterpart(
            &jessica,
            "Yes, 2pm. I'll update the calendar invite.",
            Vec::new(),
            two_days_ago + Duration::minutes(30),
        ),
    ];

    vec![
        (sarah, sarah_timeline),
        (michael, michael_timeline),
        (jessica, jessica_timeline),
    ]
}
