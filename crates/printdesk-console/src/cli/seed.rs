use chrono::{Duration, Utc};
use printdesk_core::{Message, SenderRole};

/// Demo dataset: two customers, three conversations worth of traffic.
pub fn demo_messages() -> Vec<Message> {
    let now = Utc::now();
    let msg = |id: &str,
               minutes_ago: i64,
               sender: SenderRole,
               read: bool,
               project_id: &str,
               project_name: &str,
               customer_id: &str,
               customer_email: &str,
               body: &str| Message {
        id: id.to_string(),
        body: body.to_string(),
        sender,
        sent_at: now - Duration::minutes(minutes_ago),
        read,
        project_id: project_id.to_string(),
        project_name: project_name.to_string(),
        customer_id: customer_id.to_string(),
        customer_email: customer_email.to_string(),
    };

    vec![
        msg(
            "msg-1", 180, SenderRole::Customer, true,
            "proj-bracket", "Drone arm bracket", "cust-ana", "ana@example.com",
            "Hi! Can the bracket be printed in PETG instead of PLA?",
        ),
        msg(
            "msg-2", 170, SenderRole::Operator, false,
            "proj-bracket", "Drone arm bracket", "cust-ana", "ana@example.com",
            "Yes, PETG works well for this part. Same price, one extra day.",
        ),
        msg(
            "msg-3", 90, SenderRole::Customer, false,
            "proj-bracket", "Drone arm bracket", "cust-ana", "ana@example.com",
            "Great, go ahead with PETG then.",
        ),
        msg(
            "msg-4", 60, SenderRole::Customer, false,
            "proj-vase", "Spiral vase", "cust-ben", "ben@example.com",
            "Is a 0.2mm layer height fine for the vase, or should we go finer?",
        ),
        msg(
            "msg-5", 30, SenderRole::Customer, false,
            "proj-tag", "Pet name tags", "cust-ana", "ana@example.com",
            "Could you add a second tag with the phone number on the back?",
        ),
    ]
}
