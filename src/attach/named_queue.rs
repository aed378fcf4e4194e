//! Handle to an explicitly attached named queue

use std::{fmt, sync::Arc};

use log::warn;

use crate::{
    error::{RendezvousError, Result},
    queue::ThreadSafeQueue,
};

use super::table::AttachTable;

struct Attachment<U> {
    key: String,
    queue: Arc<ThreadSafeQueue<U>>,
}

/// Handle that must be attached to a created key before use.
///
/// Every accessor fails with `NotAttached` while the handle is detached.
/// Dropping an attached handle detaches it.
pub struct NamedQueue<U> {
    table: AttachTable,
    attachment: Option<Attachment<U>>,
}

impl<U: Send + 'static> NamedQueue<U> {
    /// Detached handle on the process-wide table
    pub fn new() -> Self {
        Self::with_table(AttachTable::global())
    }

    /// Detached handle on `table`
    pub fn with_table(table: &AttachTable) -> Self {
        Self {
            table: table.clone(),
            attachment: None,
        }
    }

    /// Create `key` in this handle's table (see [`AttachTable::create`])
    pub fn create(&self, key: &str) -> Result<()> {
        self.table.create::<U>(key)
    }

    /// Attach to the created key `key`
    pub fn attach(&mut self, key: &str) -> Result<()> {
        if let Some(attachment) = &self.attachment {
            return Err(RendezvousError::already_attached(attachment.key.clone()));
        }

        let queue = self.table.attach::<U>(key)?;
        self.attachment = Some(Attachment {
            key: key.to_owned(),
            queue,
        });

        Ok(())
    }
}

impl<U> NamedQueue<U> {
    /// Release the attachment; the last detach erases the key and its data
    pub fn detach(&mut self) -> Result<()> {
        let attachment = self
            .attachment
            .take()
            .ok_or_else(|| RendezvousError::not_attached("detach"))?;
        self.table.detach(&attachment.key);
        Ok(())
    }

    /// Whether the handle is attached
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Key of the current attachment
    pub fn key(&self) -> Option<&str> {
        self.attachment.as_ref().map(|attachment| attachment.key.as_str())
    }

    fn queue(&self, operation: &'static str) -> Result<&ThreadSafeQueue<U>> {
        self.attachment
            .as_ref()
            .map(|attachment| attachment.queue.as_ref())
            .ok_or_else(|| RendezvousError::not_attached(operation))
    }

    /// Append a value at the tail
    pub fn push(&self, value: U) -> Result<()> {
        self.queue("push")?.push(value);
        Ok(())
    }

    /// Remove and return the head value
    pub fn pop(&self) -> Result<U> {
        self.queue("pop")?.pop()
    }

    /// Remove and return the head value if there is one
    pub fn try_pop(&self) -> Result<Option<U>> {
        Ok(self.queue("try_pop")?.try_pop())
    }

    /// Number of queued values
    pub fn size(&self) -> Result<usize> {
        Ok(self.queue("size")?.len())
    }

    /// Whether the queue is empty
    pub fn empty(&self) -> Result<bool> {
        Ok(self.queue("empty")?.is_empty())
    }

    /// Discard every queued value
    pub fn clear(&self) -> Result<()> {
        self.queue("clear")?.clear();
        Ok(())
    }
}

impl<U: Clone> NamedQueue<U> {
    /// Copy of the head value
    pub fn front(&self) -> Result<U> {
        self.queue("front")?.front()
    }

    /// Copy of the tail value
    pub fn back(&self) -> Result<U> {
        self.queue("back")?.back()
    }
}

impl<U: Send + 'static> Default for NamedQueue<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Drop for NamedQueue<U> {
    fn drop(&mut self) {
        if self.is_attached() {
            if let Err(err) = self.detach() {
                warn!("named queue: detach on drop failed: {}", err);
            }
        }
    }
}

impl<U> fmt::Debug for NamedQueue<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedQueue")
            .field("key", &self.key())
            .field("attached", &self.is_attached())
            .finish()
    }
}
