//! Registry configuration

use serde::{Deserialize, Serialize};

use crate::error::{RendezvousError, Result};

/// Configuration for creating a [`Registry`](super::Registry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Name used in log records
    pub name: String,
    /// Number of keys to pre-allocate room for
    pub initial_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            name: crate::config::DEFAULT_REGISTRY_NAME.to_string(),
            initial_capacity: crate::config::DEFAULT_TABLE_CAPACITY,
        }
    }
}

impl RegistryConfig {
    /// Create a configuration with the given registry name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the number of pre-allocated table slots
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(RendezvousError::invalid_parameter(
                "name",
                "Registry name cannot be empty",
            ));
        }

        Ok(())
    }
}
