//! Table of explicitly created, manually counted queues

use std::{
    any::{self, Any, TypeId},
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};

use lazy_static::lazy_static;
use log::debug;

use crate::{
    error::{RendezvousError, Result},
    queue::ThreadSafeQueue,
    sync::lock,
};

lazy_static! {
    static ref GLOBAL_ATTACH_TABLE: AttachTable = AttachTable::new();
}

struct AttachEntry {
    count: usize,
    type_id: TypeId,
    type_name: &'static str,
    /// `Arc<ThreadSafeQueue<U>>` for the element type named by `type_id`
    queue: Arc<dyn Any + Send + Sync>,
}

/// Keyed table of queues with explicit attach counts.
///
/// Clones share the same table. Counts change only under the table lock.
#[derive(Clone, Default)]
pub struct AttachTable {
    entries: Arc<Mutex<HashMap<String, AttachEntry>>>,
}

impl AttachTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide table used by [`NamedQueue::new`](super::NamedQueue::new)
    pub fn global() -> &'static AttachTable {
        &GLOBAL_ATTACH_TABLE
    }

    /// Create an empty queue of `U` under `key` with no attachments.
    ///
    /// Creating an existing key leaves its count and data untouched.
    pub fn create<U: Send + 'static>(&self, key: &str) -> Result<()> {
        let mut entries = lock(&self.entries);

        if let Some(entry) = entries.get(key) {
            if entry.type_id != TypeId::of::<U>() {
                return Err(RendezvousError::type_mismatch(
                    key,
                    entry.type_name,
                    any::type_name::<U>(),
                ));
            }
            return Ok(());
        }

        let queue: Arc<dyn Any + Send + Sync> = Arc::new(ThreadSafeQueue::<U>::new());
        entries.insert(
            key.to_owned(),
            AttachEntry {
                count: 0,
                type_id: TypeId::of::<U>(),
                type_name: any::type_name::<U>(),
                queue,
            },
        );
        debug!("attach table: created '{}'", key);

        Ok(())
    }

    /// Increment the count of `key` and return its queue
    pub(crate) fn attach<U: Send + 'static>(&self, key: &str) -> Result<Arc<ThreadSafeQueue<U>>> {
        let mut entries = lock(&self.entries);
        let entry = entries
            .get_mut(key)
            .ok_or_else(|| RendezvousError::key_not_found(key))?;

        let queue = entry
            .queue
            .clone()
            .downcast::<ThreadSafeQueue<U>>()
            .map_err(|_| RendezvousError::type_mismatch(key, entry.type_name, any::type_name::<U>()))?;

        entry.count += 1;
        debug!("attach table: attached '{}' ({} attached)", key, entry.count);

        Ok(queue)
    }

    /// Decrement the count of `key`, erasing the entry when it reaches zero.
    /// Returns whether the entry was erased.
    pub(crate) fn detach(&self, key: &str) -> bool {
        let mut entries = lock(&self.entries);
        let Some(entry) = entries.get_mut(key) else {
            return false;
        };

        entry.count = entry.count.saturating_sub(1);
        if entry.count > 0 {
            debug!("attach table: detached '{}' ({} attached)", key, entry.count);
            return false;
        }

        entries.remove(key);
        debug!("attach table: erased '{}'", key);
        true
    }

    /// Current attach count of `key`, if it exists
    pub fn attached_count(&self, key: &str) -> Option<usize> {
        lock(&self.entries).get(key).map(|entry| entry.count)
    }

    /// Whether `key` has been created and not yet erased
    pub fn contains(&self, key: &str) -> bool {
        lock(&self.entries).contains_key(key)
    }

    /// Number of existing entries
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for AttachTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = lock(&self.entries);
        let mut map = f.debug_map();
        for (key, entry) in entries.iter() {
            map.entry(key, &(entry.type_name, entry.count));
        }
        map.finish()
    }
}
