//! Single-direction named channel

use std::{fmt, ops::Deref};

use crate::{
    error::Result,
    queue::{PollConfig, ThreadSafeQueue},
    registry::{self, Registry, Shared},
};

/// Endpoint of a named queue. Every endpoint opened with the same key on the
/// same registry shares one [`ThreadSafeQueue`].
pub struct Channel<T> {
    queue: Shared<ThreadSafeQueue<T>>,
}

impl<T: Send + 'static> Channel<T> {
    /// Open (or join) the channel `key` in `registry`
    pub fn open(registry: &Registry, key: &str) -> Result<Self> {
        let queue = registry.acquire::<ThreadSafeQueue<T>>(key)?;
        Ok(Self { queue })
    }

    /// Open (or join) the channel `key` in the process-wide registry
    pub fn open_global(key: &str) -> Result<Self> {
        Self::open(registry::global(), key)
    }
}

impl<T> Channel<T> {
    /// Key the channel was opened with
    pub fn key(&self) -> &str {
        self.queue.key()
    }

    /// Push a message at the tail
    pub fn send(&self, message: T) {
        self.queue.push(message);
    }

    /// Poll for the next message according to `config`
    pub fn recv(&self, config: &PollConfig) -> Result<T> {
        self.queue.poll_pop(config)
    }

    /// Take the next message if one is queued
    pub fn try_recv(&self) -> Option<T> {
        self.queue.try_pop()
    }

    /// Whether two endpoints share one queue
    pub fn same_channel(this: &Self, other: &Self) -> bool {
        Shared::ptr_eq(&this.queue, &other.queue)
    }

    /// Number of endpoints currently open on this channel
    pub fn endpoint_count(this: &Self) -> usize {
        Shared::strong_count(&this.queue)
    }
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
        }
    }
}

impl<T> Deref for Channel<T> {
    type Target = ThreadSafeQueue<T>;

    fn deref(&self) -> &ThreadSafeQueue<T> {
        &self.queue
    }
}

impl<T> fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("key", &self.key())
            .field("queue", &*self.queue)
            .finish()
    }
}
