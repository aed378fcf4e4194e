//! Thread-safe FIFO queues
//!
//! A [`ThreadSafeQueue`] is an unbounded FIFO guarded by a single mutex. No
//! operation waits for data; callers that need to wait poll [`ThreadSafeQueue::try_pop`]
//! or use [`ThreadSafeQueue::poll_pop`] with a [`PollConfig`].

pub mod concurrent;
pub mod poll;
pub mod stats;


pub use concurrent::ThreadSafeQueue;
pub use poll::{PollConfig, WaitStrategy};
pub use stats::{QueueStats, QueueStatsSnapshot};
