use crate::constants::ENV_OPERATOR;

/// Supplies the identity of the signed-in operator, if any.
pub trait IdentityProvider {
    fn current_operator_id(&self) -> Option<String>;
}

/// Fixed identity, configured up front or taken from the environment.
pub struct StaticIdentity {
    operator_id: Option<String>,
}

impl StaticIdentity {
    pub fn new(operator_id: impl Into<String>) -> Self {
        Self {
            operator_id: Some(operator_id.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { operator_id: None }
    }

    /// Read the operator id from `PRINTDESK_OPERATOR`.
    pub fn from_env() -> Self {
        Self {
            operator_id: std::env::var(ENV_OPERATOR).ok().filter(|v| !v.is_empty()),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_operator_id(&self) -> Option<String> {
        self.operator_id.clone()
    }
}
