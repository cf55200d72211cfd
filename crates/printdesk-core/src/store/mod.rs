pub mod comms_store;
pub mod json_file;
pub mod memory;
pub mod message_store;
pub mod views;

pub use comms_store::{CommsStore, ReplyOutcome};
pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use message_store::{MessageStore, StoreError};
pub use views::build_threads;
