//! # Rendezvous - Named Resources and Queues for Threads
//!
//! Rendezvous lets independent threads meet on a shared object identified only
//! by a string key. The first thread to ask for a key creates the object,
//! later ones join it, and the object is destroyed as soon as the last holder
//! lets go.
//!
//! ## Features
//!
//! - **Named registry**: type-erased, string-keyed, weakly held resources
//! - **Automatic lifecycle**: entries evicted when the last handle drops
//! - **Run-time type tags**: one key cannot be used with two types at once
//! - **Thread-safe queues**: mutex-guarded unbounded FIFO with race-free `try_pop`
//! - **Named channels**: queues shared through the registry, no create step
//! - **Attach table**: explicit create/attach/detach named queues
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  Channel<T> / ChannelPair   │  NamedQueue<U>      │
//! ├─────────────────────────────┼─────────────────────┤
//! │  Registry (weak entries,    │  AttachTable        │
//! │  type tags, auto eviction)  │  (manual counts)    │
//! ├─────────────────────────────┴─────────────────────┤
//! │              ThreadSafeQueue<T>                   │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use rendezvous::{Channel, Registry};
//!
//! let registry = Registry::new();
//! let producer = Channel::<u32>::open(&registry, "numbers")?;
//! let consumer = Channel::<u32>::open(&registry, "numbers")?;
//!
//! producer.send(7);
//! assert_eq!(consumer.try_recv(), Some(7));
//! # Ok::<(), rendezvous::RendezvousError>(())
//! ```

pub mod error;
pub mod queue;
pub mod registry;
pub mod channel;
pub mod attach;

mod sync;

// Main API re-exports
pub use error::{RendezvousError, Result};
pub use queue::{PollConfig, QueueStatsSnapshot, ThreadSafeQueue, WaitStrategy};
pub use registry::{
    acquire, global, Registry, RegistryConfig, RegistryStatsSnapshot, Resource, Shared, WeakShared,
};
pub use channel::{Channel, ChannelPair};
pub use attach::{AttachTable, NamedQueue};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration constants
pub mod config {
    /// Name of a registry built with `Registry::new`
    pub const DEFAULT_REGISTRY_NAME: &str = "default";

    /// Name of the process-wide registry
    pub const GLOBAL_REGISTRY_NAME: &str = "global";

    /// Keys pre-allocated in a new registry table
    pub const DEFAULT_TABLE_CAPACITY: usize = 64;
}
