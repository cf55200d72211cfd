use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderRole {
    /// Admin-side participant.
    Operator,
    /// The customer on the other side of the conversation.
    Customer,
}

/// Grouping key for a conversation. Derived from a message's routing fields,
/// never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadKey {
    pub project_id: String,
    pub customer_id: String,
}

impl ThreadKey {
    pub fn new(project_id: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            customer_id: customer_id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Store-assigned opaque id. Optimistic local copies carry a
    /// `local-`-prefixed id until the next full reload.
    pub id: String,
    pub body: String,
    pub sender: SenderRole,
    /// Ordering key within a thread.
    pub sent_at: DateTime<Utc>,
    /// Meaningful only for customer-authored messages; operator messages are
    /// stored with `false` but never counted as unread.
    pub read: bool,
    // Denormalized routing/display fields carried on every record.
    pub project_id: String,
    pub project_name: String,
    pub customer_id: String,
    pub customer_email: String,
}

impl Message {
    pub fn thread_key(&self) -> ThreadKey {
        ThreadKey {
            project_id: self.project_id.clone(),
            customer_id: self.customer_id.clone(),
        }
    }

    pub fn is_unread(&self) -> bool {
        self.sender == SenderRole::Customer && !self.read
    }
}

/// Fields for a message that has not been assigned an id by the store yet.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub body: String,
    pub sender: SenderRole,
    pub read: bool,
    pub sent_at: DateTime<Utc>,
    pub project_id: String,
    pub project_name: String,
    pub customer_id: String,
    pub customer_email: String,
}

impl NewMessage {
    pub fn into_message(self, id: String) -> Message {
        Message {
            id,
            body: self.body,
            sender: self.sender,
            sent_at: self.sent_at,
            read: self.read,
            project_id: self.project_id,
            project_name: self.project_name,
            customer_id: self.customer_id,
            customer_email: self.customer_email,
        }
    }
}
