/// Prefix for optimistic client-assigned message ids. Replaced by the
/// store-assigned id on the next full reload.
pub const LOCAL_ID_PREFIX: &str = "local-";

/// File name of the JSON message store under the data directory.
pub const DEFAULT_STORE_FILENAME: &str = "messages.json";

/// Environment variable holding the log filter (EnvFilter syntax).
pub const ENV_LOG: &str = "PRINTDESK_LOG";

/// Environment variable enabling append-mode file logging.
pub const ENV_LOG_FILE: &str = "PRINTDESK_LOG_FILE";

/// Environment variable holding the operator id for the console.
pub const ENV_OPERATOR: &str = "PRINTDESK_OPERATOR";
