//! The process-wide registry instance

use lazy_static::lazy_static;

use crate::error::Result;

use super::{
    config::RegistryConfig,
    handle::Shared,
    manager::{Registry, Resource},
};

lazy_static! {
    static ref GLOBAL_REGISTRY: Registry =
        Registry::build(RegistryConfig::new(crate::config::GLOBAL_REGISTRY_NAME));
}

/// The registry shared by the whole process, created on first use
pub fn global() -> &'static Registry {
    &GLOBAL_REGISTRY
}

/// Acquire `key` from the process-wide registry
pub fn acquire<T: Resource>(key: &str) -> Result<Shared<T>> {
    global().acquire(key)
}
