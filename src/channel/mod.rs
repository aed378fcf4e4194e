//! Named channels: thread-safe queues shared through the registry
//!
//! Two threads that agree on a key each open the channel independently; the
//! first open creates the queue and later opens join it. The queue is
//! destroyed when the last endpoint drops, so there is no separate create or
//! teardown step.

pub mod named;
pub mod pair;

#[cfg(test)]
mod tests;

pub use named::Channel;
pub use pair::ChannelPair;
