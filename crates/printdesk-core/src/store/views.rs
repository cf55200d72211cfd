use std::collections::HashMap;

use crate::models::{Message, Thread, ThreadKey};

/// Group a flat message list into per-customer threads.
///
/// Input is assumed ascending by `sent_at`. Single pass: the first message
/// under a (project, customer) key creates the thread, later ones append and
/// update `last_message_at` / `unread_count`. Output is sorted descending by
/// `last_message_at`; threads with equal activity keep the relative order in
/// which their keys first appeared in the input (stable sort).
pub fn build_threads(messages: &[Message]) -> Vec<Thread> {
    let mut first_seen: Vec<ThreadKey> = Vec::new();
    let mut by_key: HashMap<ThreadKey, Thread> = HashMap::new();

    for message in messages {
        let key = message.thread_key();
        match by_key.get_mut(&key) {
            Some(thread) => thread.push(message.clone()),
            None => {
                first_seen.push(key.clone());
                by_key.insert(key, Thread::from_first_message(message.clone()));
            }
        }
    }

    let mut threads: Vec<Thread> = first_seen
        .into_iter()
        .filter_map(|key| by_key.remove(&key))
        .collect();
    threads.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));

    tracing::debug!(
        messages = messages.len(),
        threads = threads.len(),
        "rebuilt thread view"
    );

    threads
}
