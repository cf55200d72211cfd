use parking_lot::Mutex;

use crate::models::{Message, NewMessage};
use crate::store::message_store::{MessageStore, StoreError};

/// In-memory message store for tests and fixtures. Ids are assigned from a
/// counter; failure knobs simulate outages and rejected writes.
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    messages: Vec<Message>,
    next_id: u64,
    fail_list: bool,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(messages: Vec<Message>) -> Self {
        let next_id = messages.len() as u64 + 1;
        Self {
            inner: Mutex::new(Inner {
                messages,
                next_id,
                fail_list: false,
                fail_writes: false,
            }),
        }
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.inner.lock().fail_list = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.lock().fail_writes = fail;
    }

    /// Snapshot of the stored messages, in insertion order.
    pub fn messages(&self) -> Vec<Message> {
        self.inner.lock().messages.clone()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore for InMemoryStore {
    async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        let inner = self.inner.lock();
        if inner.fail_list {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        let mut messages = inner.messages.clone();
        // Stable sort keeps insertion order among equal timestamps.
        messages.sort_by_key(|m| m.sent_at);
        Ok(messages)
    }

    async fn create_message(&self, draft: NewMessage) -> Result<String, StoreError> {
        let mut inner = self.inner.lock();
        if inner.fail_writes {
            return Err(StoreError::WriteFailed("simulated write failure".to_string()));
        }
        let id = format!("msg-{}", inner.next_id);
        inner.next_id += 1;
        inner.messages.push(draft.into_message(id.clone()));
        Ok(id)
    }

    async fn update_read_flag(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        if inner.fail_writes {
            return Err(StoreError::WriteFailed("simulated write failure".to_string()));
        }
        match inner.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.read = true;
                Ok(())
            }
            None => Err(StoreError::WriteFailed(format!("no message with id {id}"))),
        }
    }
}
