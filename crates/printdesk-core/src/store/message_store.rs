use crate::models::{Message, NewMessage};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or queried.
    #[error("message store unavailable: {0}")]
    Unavailable(String),
    /// A create or update was rejected by the store.
    #[error("message store write failed: {0}")]
    WriteFailed(String),
}

/// Capability seam over the backing message collection.
///
/// `list_messages` returns the full collection ascending by `sent_at`; the
/// aggregation layer relies on that contract and does not re-verify it. The
/// trait is the place where paging/windowing would be introduced later
/// without touching the aggregation itself.
#[allow(async_fn_in_trait)]
pub trait MessageStore {
    async fn list_messages(&self) -> Result<Vec<Message>, StoreError>;

    /// Create a message and return the store-assigned id.
    async fn create_message(&self, draft: NewMessage) -> Result<String, StoreError>;

    /// Set the read flag on the message with the given id.
    async fn update_read_flag(&self, id: &str) -> Result<(), StoreError>;
}
