//! Strong and weak handles to registry resources

use std::{
    fmt,
    ops::Deref,
    sync::{Arc, Weak},
};

use super::manager::Table;

/// The shared allocation behind every handle for one key.
///
/// Dropping the last strong reference evicts the key from the registry
/// before `value` is destroyed.
pub(crate) struct Slot<T> {
    pub value: T,
    pub key: String,
    pub id: u64,
    pub table: Weak<Table>,
}

impl<T> Drop for Slot<T> {
    fn drop(&mut self) {
        // The registry may already be gone; the value then just drops.
        if let Some(table) = self.table.upgrade() {
            table.evict(&self.key, self.id);
        }
    }
}

/// Strong handle to a registry resource.
///
/// All handles issued for a key while any of them is alive point at the same
/// object. Cloning shares ownership; the resource lives until the last clone
/// drops.
pub struct Shared<T> {
    slot: Arc<Slot<T>>,
}

impl<T> Shared<T> {
    pub(crate) fn from_slot(slot: Arc<Slot<T>>) -> Self {
        Self { slot }
    }

    /// Key this resource is registered under
    pub fn key(&self) -> &str {
        &self.slot.key
    }

    /// Whether two handles refer to the same object
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.slot, &other.slot)
    }

    /// Number of strong handles currently alive for this object
    pub fn strong_count(this: &Self) -> usize {
        Arc::strong_count(&this.slot)
    }

    /// Create a non-owning observer
    pub fn downgrade(this: &Self) -> WeakShared<T> {
        WeakShared {
            slot: Arc::downgrade(&this.slot),
        }
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.slot.value
    }
}

impl<T> AsRef<T> for Shared<T> {
    fn as_ref(&self) -> &T {
        &self.slot.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared")
            .field("key", &self.slot.key)
            .field("value", &self.slot.value)
            .finish()
    }
}

/// Non-owning observer of a registry resource.
///
/// Does not keep the resource alive and does not keep its key registered.
pub struct WeakShared<T> {
    slot: Weak<Slot<T>>,
}

impl<T> WeakShared<T> {
    /// Get a strong handle if the resource is still alive
    pub fn upgrade(&self) -> Option<Shared<T>> {
        self.slot.upgrade().map(Shared::from_slot)
    }

    /// Whether the observed resource has been destroyed
    pub fn is_expired(&self) -> bool {
        self.slot.strong_count() == 0
    }
}

impl<T> Clone for WeakShared<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> fmt::Debug for WeakShared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakShared")
            .field("expired", &self.is_expired())
            .finish()
    }
}
