use std::collections::HashSet;

use crate::types::ADMIN_CAPABILITY;

/// Capabilities granted to the operator issuing commands
#[derive(Debug, Clone, Default)]
pub struct Session {
    capabilities: HashSet<String>,
}

impl Session {
    /// Operator with no capabilities: SELECT only
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn admin() -> Self {
        Self::with_capabilities(&[ADMIN_CAPABILITY])
    }

    pub fn with_capabilities(capabilities: &[&str]) -> Self {
        Self {
            capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// `all` implies every other capability
    pub fn can_user(&self, capability: &str) -> bool {
        self.capabilities.contains(ADMIN_CAPABILITY) || self.capabilities.contains(capability)
    }
}
