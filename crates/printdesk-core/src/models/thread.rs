use chrono::{DateTime, Utc};

use super::message::{Message, ThreadKey};

/// A derived grouping of messages sharing a (project, customer) key.
///
/// Threads are recomputed from the full message list on every load and
/// adjusted locally after mutations; they are never persisted.
#[derive(Debug, Clone)]
pub struct Thread {
    pub key: ThreadKey,
    /// Display copies taken from the first message observed under the key.
    pub project_name: String,
    pub customer_email: String,
    /// Ascending by `sent_at`; ties keep input order.
    pub messages: Vec<Message>,
    /// Most recent activity, max `sent_at` over the thread's messages.
    pub last_message_at: DateTime<Utc>,
    /// Count of unread customer messages.
    pub unread_count: usize,
}

impl Thread {
    pub fn from_first_message(message: Message) -> Self {
        let unread_count = usize::from(message.is_unread());
        Self {
            key: message.thread_key(),
            project_name: message.project_name.clone(),
            customer_email: message.customer_email.clone(),
            last_message_at: message.sent_at,
            unread_count,
            messages: vec![message],
        }
    }

    /// Append a message belonging to this thread's key, keeping
    /// `last_message_at` and `unread_count` consistent.
    pub fn push(&mut self, message: Message) {
        if message.sent_at > self.last_message_at {
            self.last_message_at = message.sent_at;
        }
        if message.is_unread() {
            self.unread_count += 1;
        }
        self.messages.push(message);
    }

    pub fn unread_message_ids(&self) -> Vec<String> {
        self.messages
            .iter()
            .filter(|m| m.is_unread())
            .map(|m| m.id.clone())
            .collect()
    }

    /// Flip every customer message to read and zero the unread count.
    pub fn mark_all_read(&mut self) {
        for message in &mut self.messages {
            if message.is_unread() {
                message.read = true;
            }
        }
        self.unread_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SenderRole;
    use chrono::TimeZone;

    fn message(id: &str, sender: SenderRole, read: bool, at: i64) -> Message {
        Message {
            id: id.to_string(),
            body: "body".to_string(),
            sender,
            sent_at: Utc.timestamp_opt(at, 0).unwrap(),
            read,
            project_id: "proj-a".to_string(),
            project_name: "Bracket v2".to_string(),
            customer_id: "cust-1".to_string(),
            customer_email: "ana@example.com".to_string(),
        }
    }

    #[test]
    fn test_first_message_initializes_unread_count() {
        let thread = Thread::from_first_message(message("m1", SenderRole::Customer, false, 10));
        assert_eq!(thread.unread_count, 1);

        let thread = Thread::from_first_message(message("m1", SenderRole::Operator, false, 10));
        assert_eq!(thread.unread_count, 0);
    }

    #[test]
    fn test_push_only_raises_last_message_at() {
        let mut thread = Thread::from_first_message(message("m1", SenderRole::Customer, true, 20));
        thread.push(message("m2", SenderRole::Customer, true, 10));
        assert_eq!(thread.last_message_at.timestamp(), 20);

        thread.push(message("m3", SenderRole::Customer, true, 30));
        assert_eq!(thread.last_message_at.timestamp(), 30);
        assert_eq!(thread.messages.len(), 3);
    }

    #[test]
    fn test_mark_all_read_zeroes_unread() {
        let mut thread = Thread::from_first_message(message("m1", SenderRole::Customer, false, 10));
        thread.push(message("m2", SenderRole::Customer, false, 20));
        thread.push(message("m3", SenderRole::Operator, false, 30));
        assert_eq!(thread.unread_count, 2);
        assert_eq!(thread.unread_message_ids(), vec!["m1", "m2"]);

        thread.mark_all_read();
        assert_eq!(thread.unread_count, 0);
        assert!(thread.unread_message_ids().is_empty());
        // Operator messages keep their stored read flag untouched.
        assert!(!thread.messages[2].read);
    }
}
