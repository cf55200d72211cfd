use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::models::{Message, NewMessage};
use crate::store::message_store::{MessageStore, StoreError};

/// Message store persisted as a single JSON document on disk.
///
/// Every mutation is a read-modify-write of the whole file; fine at the
/// scale of one print shop's admin inbox. A missing file reads as an empty
/// collection so first use needs no setup step.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Message>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Unavailable(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| StoreError::Unavailable(format!("{}: {e}", self.path.display())))
    }

    fn write_all(&self, messages: &[Message]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::WriteFailed(format!("{}: {e}", parent.display())))?;
        }
        let raw = serde_json::to_string_pretty(messages)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        fs::write(&self.path, raw)
            .map_err(|e| StoreError::WriteFailed(format!("{}: {e}", self.path.display())))
    }

    /// Replace the whole collection, e.g. when seeding demo data.
    pub fn replace_all(&self, messages: &[Message]) -> Result<(), StoreError> {
        self.write_all(messages)
    }
}

impl MessageStore for JsonFileStore {
    async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        let mut messages = self.read_all()?;
        messages.sort_by_key(|m| m.sent_at);
        Ok(messages)
    }

    async fn create_message(&self, draft: NewMessage) -> Result<String, StoreError> {
        let mut messages = self
            .read_all()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        let id = format!("msg-{}", Uuid::new_v4());
        messages.push(draft.into_message(id.clone()));
        self.write_all(&messages)?;
        Ok(id)
    }

    async fn update_read_flag(&self, id: &str) -> Result<(), StoreError> {
        let mut messages = self
            .read_all()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        let Some(message) = messages.iter_mut().find(|m| m.id == id) else {
            return Err(StoreError::WriteFailed(format!("no message with id {id}")));
        };
        message.read = true;
        self.write_all(&messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SenderRole;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn draft(body: &str, at: i64) -> NewMessage {
        NewMessage {
            body: body.to_string(),
            sender: SenderRole::Customer,
            read: false,
            sent_at: Utc.timestamp_opt(at, 0).unwrap(),
            project_id: "proj-a".to_string(),
            project_name: "Bracket v2".to_string(),
            customer_id: "cust-1".to_string(),
            customer_email: "ana@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("messages.json"));
        assert!(store.list_messages().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("messages.json");

        let store = JsonFileStore::new(&path);
        let id = store.create_message(draft("first", 10)).await.unwrap();
        store.create_message(draft("second", 20)).await.unwrap();

        let reopened = JsonFileStore::new(&path);
        let messages = reopened.list_messages().await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].id, id);
        assert_eq!(messages[0].body, "first");
    }

    #[tokio::test]
    async fn test_update_read_flag_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messages.json");

        let store = JsonFileStore::new(&path);
        let id = store.create_message(draft("unread", 10)).await.unwrap();
        store.update_read_flag(&id).await.unwrap();

        let reopened = JsonFileStore::new(&path);
        let messages = reopened.list_messages().await.unwrap();
        assert!(messages[0].read);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messages.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.list_messages().await.unwrap_err(),
            StoreError::Unavailable(_)
        ));
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("messages.json"));
        assert!(matches!(
            store.update_read_flag("msg-404").await.unwrap_err(),
            StoreError::WriteFailed(_)
        ));
    }
}
