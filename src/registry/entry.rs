//! Type-erased registry table entries

use std::{
    any::{self, Any, TypeId},
    sync::{Arc, Weak},
};

use super::handle::Slot;

/// One key's record in the registry table
#[derive(Debug)]
pub(crate) struct Entry {
    /// Weak view of the `Arc<Slot<T>>` behind every handle for this key
    pub resource: Weak<dyn Any + Send + Sync>,
    /// Tag of the type the key was created with
    pub type_id: TypeId,
    pub type_name: &'static str,
    /// Matches `Slot::id` of the allocation this entry observes
    pub id: u64,
}

impl Entry {
    pub fn new<T: Send + Sync + 'static>(slot: &Arc<Slot<T>>) -> Self {
        let resource: Weak<Slot<T>> = Arc::downgrade(slot);
        let resource: Weak<dyn Any + Send + Sync> = resource;
        Self {
            resource,
            type_id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            id: slot.id,
        }
    }

    pub fn holds<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    pub fn is_live(&self) -> bool {
        self.resource.strong_count() > 0
    }
}
