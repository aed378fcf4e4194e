//! Explicitly attached named queues
//!
//! An alternative to registry channels with an explicit protocol: one party
//! calls [`AttachTable::create`] for a key, every participant then
//! [`NamedQueue::attach`]es to it and detaches when done. The entry (and its
//! queued data) is erased when the attach count returns to zero. Prefer
//! [`Channel`](crate::channel::Channel), which needs no create step and cannot
//! be attached before creation.

pub mod named_queue;
pub mod table;

#[cfg(test)]
mod tests;

pub use named_queue::NamedQueue;
pub use table::AttachTable;
