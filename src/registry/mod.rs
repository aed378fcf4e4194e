//! Named resource registry with reference-counted lifecycle
//!
//! A [`Registry`] maps string keys to resources of any type. Callers get a
//! [`Shared`] strong handle; every caller asking for the same key while a
//! handle is alive gets the same object. The table itself only holds weak
//! references, so an entry disappears exactly when its last handle drops and
//! the next `acquire` builds a fresh object.
//!
//! ```text
//!  acquire::<T>("chan") ──┐
//!                         ▼
//!  ┌───────────────── Registry table (one lock) ─────────────────┐
//!  │ "chan" → { Weak<dyn Any>, TypeId(T), id }                    │
//!  └──────────────────────────────────────────────────────────────┘
//!                         │ upgrade / create
//!                         ▼
//!  Shared<T> ──► Arc<Slot<T>> ──(last drop)──► evict "chan" if id matches
//! ```

pub mod config;
pub mod entry;
pub mod global;
pub mod handle;
pub mod manager;
pub mod stats;


pub use config::RegistryConfig;
pub use global::{acquire, global};
pub use handle::{Shared, WeakShared};
pub use manager::{Registry, Resource};
pub use stats::{RegistryStats, RegistryStatsSnapshot};
