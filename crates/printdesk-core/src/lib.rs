pub mod config;
pub mod constants;
pub mod identity;
pub mod models;
pub mod notify;
pub mod store;
pub mod tracing_setup;

// Re-export the types most callers need at the crate root.
pub use models::{Message, NewMessage, SenderRole, Thread, ThreadKey};
pub use store::{CommsStore, MessageStore, ReplyOutcome, StoreError};
