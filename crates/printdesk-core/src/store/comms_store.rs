use chrono::Utc;
use futures::future::join_all;
use uuid::Uuid;

use crate::constants::LOCAL_ID_PREFIX;
use crate::models::{NewMessage, SenderRole, Thread, ThreadKey};
use crate::notify::{NotificationKind, NotificationSink};
use crate::store::message_store::MessageStore;
use crate::store::views::build_threads;

/// Result of a reply submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// Stored; the caller should clear its composer.
    Sent,
    /// Store rejected the write; composer text should be preserved for a
    /// manual retry.
    Failed,
    /// Trimmed body was empty. No store call was made.
    EmptyBody,
    /// No thread is selected for reply composition.
    NoSelection,
    /// A previous submission is still outstanding.
    Busy,
}

/// Session state for the admin communications view: the derived thread list,
/// the active selection, and the reply-submission guard. Owns nothing
/// persistent; the backing store holds the authoritative records.
pub struct CommsStore<S, N> {
    store: S,
    notifier: N,
    threads: Vec<Thread>,
    selected: Option<ThreadKey>,
    /// Mirrors the disabled send control while a reply is outstanding.
    reply_in_flight: bool,
}

impl<S: MessageStore, N: NotificationSink> CommsStore<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            store,
            notifier,
            threads: Vec::new(),
            selected: None,
            reply_in_flight: false,
        }
    }

    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    pub fn selected(&self) -> Option<&ThreadKey> {
        self.selected.as_ref()
    }

    pub fn selected_thread(&self) -> Option<&Thread> {
        let key = self.selected.as_ref()?;
        self.threads.iter().find(|t| &t.key == key)
    }

    /// Rebuild the thread view from the full message list.
    ///
    /// Returns whether the view was refreshed. On store failure the previous
    /// (possibly stale or empty) view is kept and the user is notified; there
    /// is no automatic retry.
    pub async fn load(&mut self) -> bool {
        match self.store.list_messages().await {
            Ok(messages) => {
                self.threads = build_threads(&messages);
                if let Some(selected) = &self.selected {
                    if !self.threads.iter().any(|t| &t.key == selected) {
                        self.selected = None;
                    }
                }
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load messages");
                self.notifier.notify(
                    NotificationKind::Error,
                    "Could not load conversations",
                    "The message store is unavailable. Try again in a moment.",
                );
                false
            }
        }
    }

    /// Make the thread the active selection and mark its unread customer
    /// messages read.
    ///
    /// Read-flag updates are issued concurrently and awaited collectively.
    /// Each failure is caught per call and logged only; local state always
    /// reflects the intended end state (unread count zero). Re-selecting an
    /// already-read thread issues no store calls. Returns false when no
    /// thread carries the key.
    pub async fn select_thread(&mut self, key: &ThreadKey) -> bool {
        let Some(unread_ids) = self
            .threads
            .iter()
            .find(|t| &t.key == key)
            .map(Thread::unread_message_ids)
        else {
            return false;
        };
        self.selected = Some(key.clone());

        if unread_ids.is_empty() {
            return true;
        }

        let results = join_all(
            unread_ids
                .iter()
                .map(|id| self.store.update_read_flag(id)),
        )
        .await;
        for (id, result) in unread_ids.iter().zip(results) {
            if let Err(err) = result {
                // Known inconsistency risk: the local copy is still flipped
                // to read below.
                tracing::warn!(message_id = %id, error = %err, "read-flag update failed");
            }
        }

        if let Some(thread) = self.threads.iter_mut().find(|t| &t.key == key) {
            thread.mark_all_read();
        }
        true
    }

    /// Append an operator reply to the selected thread.
    ///
    /// The local copy gets a temporary client id and the thread list is
    /// re-sorted so the replied-to conversation moves to the front. On store
    /// failure nothing is mutated locally so the composer text can be
    /// resubmitted as-is.
    pub async fn append_reply(&mut self, body: &str) -> ReplyOutcome {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return ReplyOutcome::EmptyBody;
        }
        if self.reply_in_flight {
            return ReplyOutcome::Busy;
        }
        let Some(thread) = self.selected_thread() else {
            return ReplyOutcome::NoSelection;
        };

        let draft = NewMessage {
            body: trimmed.to_string(),
            sender: SenderRole::Operator,
            // Stored as false per current behavior; never counted as unread
            // for operator-authored messages.
            read: false,
            sent_at: Utc::now(),
            project_id: thread.key.project_id.clone(),
            project_name: thread.project_name.clone(),
            customer_id: thread.key.customer_id.clone(),
            customer_email: thread.customer_email.clone(),
        };
        let key = thread.key.clone();

        self.reply_in_flight = true;
        let result = self.store.create_message(draft.clone()).await;
        self.reply_in_flight = false;

        match result {
            Ok(stored_id) => {
                tracing::debug!(stored_id = %stored_id, "reply stored");
                let local_id = format!("{LOCAL_ID_PREFIX}{}", Uuid::new_v4());
                let message = draft.into_message(local_id);
                if let Some(thread) = self.threads.iter_mut().find(|t| t.key == key) {
                    thread.push(message);
                }
                self.threads
                    .sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));
                self.notifier.notify(
                    NotificationKind::Success,
                    "Reply sent",
                    &format!("Your reply to {} was delivered.", key.customer_id),
                );
                ReplyOutcome::Sent
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to store reply");
                self.notifier.notify(
                    NotificationKind::Error,
                    "Reply not sent",
                    "The message could not be stored. Your text was kept.",
                );
                ReplyOutcome::Failed
            }
        }
    }
}
