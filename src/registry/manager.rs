//! Core registry: the key table and the acquire/evict protocol

use std::{
    any,
    collections::HashMap,
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

use log::{debug, trace, warn};

use crate::{
    error::{RendezvousError, Result},
    sync::lock,
};

use super::{
    config::RegistryConfig,
    entry::Entry,
    handle::{Shared, Slot},
    stats::{RegistryStats, RegistryStatsSnapshot},
};

/// Types that `Registry::acquire` can build on first use
pub trait Resource: Default + Send + Sync + 'static {}

impl<T: Default + Send + Sync + 'static> Resource for T {}

/// Shared state behind every clone of a [`Registry`]
pub(crate) struct Table {
    name: String,
    entries: Mutex<HashMap<String, Entry>>,
    next_id: AtomicU64,
    stats: RegistryStats,
}

impl Table {
    /// Remove `key` if it still refers to allocation `id`.
    ///
    /// Called from the last handle's drop. A concurrent `acquire` may have
    /// already replaced the expired entry with a new object, which is left alone.
    pub(crate) fn evict(&self, key: &str, id: u64) {
        let removed = {
            let mut entries = lock(&self.entries);
            match entries.get(key) {
                Some(entry) if entry.id == id => entries.remove(key),
                _ => None,
            }
        };

        if removed.is_some() {
            self.stats.record_evicted();
            debug!("registry '{}': evicted '{}'", self.name, key);
        }
    }
}

/// Process-local table of named, reference-counted resources.
///
/// Cloning a `Registry` yields another view of the same table. All lookups,
/// creations and evictions go through one lock, so they are totally ordered
/// with respect to each other.
#[derive(Clone)]
pub struct Registry {
    table: Arc<Table>,
}

impl Registry {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::build(RegistryConfig::default())
    }

    /// Create an empty registry from a validated configuration
    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    pub(crate) fn build(config: RegistryConfig) -> Self {
        Self {
            table: Arc::new(Table {
                name: config.name,
                entries: Mutex::new(HashMap::with_capacity(config.initial_capacity)),
                next_id: AtomicU64::new(1),
                stats: RegistryStats::default(),
            }),
        }
    }

    /// Get the resource registered under `key`, creating a default one if
    /// the key is unused or its previous resource has been released.
    ///
    /// Fails with `TypeMismatch` if `key` currently holds a different type.
    pub fn acquire<T: Resource>(&self, key: &str) -> Result<Shared<T>> {
        self.acquire_with(key, T::default)
    }

    /// Like [`acquire`](Self::acquire), building a missing resource with `init`.
    ///
    /// `init` runs under the registry lock and must not use this registry.
    pub fn acquire_with<T, F>(&self, key: &str, init: F) -> Result<Shared<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let table = &self.table;
        let mut entries = lock(&table.entries);
        table.stats.record_acquisition();

        // The tag is checked before liveness: an entry whose last handle is
        // mid-teardown still rejects other types until its eviction runs.
        if let Some(entry) = entries.get(key) {
            if !entry.holds::<T>() {
                table.stats.record_type_mismatch();
                warn!(
                    "registry '{}': key '{}' holds {}, requested {}",
                    table.name,
                    key,
                    entry.type_name,
                    any::type_name::<T>()
                );
                return Err(RendezvousError::type_mismatch(
                    key,
                    entry.type_name,
                    any::type_name::<T>(),
                ));
            }

            if let Some(resource) = entry.resource.upgrade() {
                match resource.downcast::<Slot<T>>() {
                    Ok(slot) => {
                        table.stats.record_reused();
                        trace!("registry '{}': joined '{}'", table.name, key);
                        return Ok(Shared::from_slot(slot));
                    }
                    Err(resource) => {
                        // Release the lock first: this may be the last strong
                        // reference, and its eviction takes the same lock.
                        let expected = entry.type_name;
                        drop(entries);
                        drop(resource);
                        return Err(RendezvousError::type_mismatch(
                            key,
                            expected,
                            any::type_name::<T>(),
                        ));
                    }
                }
            }
        }

        let slot = Arc::new(Slot {
            value: init(),
            key: key.to_owned(),
            id: table.next_id.fetch_add(1, Ordering::Relaxed),
            table: Arc::downgrade(table),
        });
        entries.insert(key.to_owned(), Entry::new(&slot));
        table.stats.record_created();
        debug!(
            "registry '{}': created '{}' as {}",
            table.name,
            key,
            any::type_name::<T>()
        );

        Ok(Shared::from_slot(slot))
    }

    /// Whether `key` currently refers to a live resource
    pub fn contains(&self, key: &str) -> bool {
        lock(&self.table.entries)
            .get(key)
            .is_some_and(Entry::is_live)
    }

    /// Type name the live resource under `key` was created with
    pub fn type_name_of(&self, key: &str) -> Option<&'static str> {
        lock(&self.table.entries)
            .get(key)
            .filter(|entry| entry.is_live())
            .map(|entry| entry.type_name)
    }

    /// Number of keys with a live resource
    pub fn len(&self) -> usize {
        lock(&self.table.entries)
            .values()
            .filter(|entry| entry.is_live())
            .count()
    }

    /// Whether no key has a live resource
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted keys with a live resource
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = lock(&self.table.entries)
            .iter()
            .filter(|(_, entry)| entry.is_live())
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    /// Registry name from its configuration
    pub fn name(&self) -> &str {
        &self.table.name
    }

    /// Snapshot of the registry counters
    pub fn stats(&self) -> RegistryStatsSnapshot {
        self.table.stats.snapshot(self.len())
    }

    /// Whether two registry values share one table
    pub fn same_registry(&self, other: &Registry) -> bool {
        Arc::ptr_eq(&self.table, &other.table)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.table.name)
            .field("keys", &self.keys())
            .finish()
    }
}
