pub mod message;
pub mod thread;

pub use message::{Message, NewMessage, SenderRole, ThreadKey};
pub use thread::Thread;
