use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_STORE_FILENAME;

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Path to the JSON message store.
    pub store_path: PathBuf,
    /// Operator id, when configured statically.
    pub operator_id: Option<String>,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(store_path: P) -> Self {
        Self {
            store_path: store_path.as_ref().to_path_buf(),
            operator_id: None,
        }
    }

    pub fn with_operator(mut self, operator_id: impl Into<String>) -> Self {
        self.operator_id = Some(operator_id.into());
        self
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("printdesk").join(DEFAULT_STORE_FILENAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_operator_sets_identity() {
        let config = CoreConfig::new("messages.json");
        assert_eq!(config.operator_id, None);

        let config = config.with_operator("op-7");
        assert_eq!(config.operator_id.as_deref(), Some("op-7"));
        assert_eq!(config.store_path, PathBuf::from("messages.json"));
    }
}
