//! Caller-side waiting on a queue by polling `try_pop`

use std::{
    thread,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};

use crate::error::{RendezvousError, Result};

use super::concurrent::ThreadSafeQueue;

/// What a poller does between two empty `try_pop` attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaitStrategy {
    /// Give up the rest of the time slice (lowest latency, burns CPU)
    Yield,
    /// Sleep for a fixed interval
    Sleep(Duration),
}

impl Default for WaitStrategy {
    fn default() -> Self {
        Self::Yield
    }
}

/// Polling configuration for [`ThreadSafeQueue::poll_pop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PollConfig {
    /// Give up after this long; `None` polls until a value arrives
    pub timeout: Option<Duration>,
    /// Back-off between attempts
    pub strategy: WaitStrategy,
}

impl PollConfig {
    /// Poll forever, yielding between attempts
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the back-off strategy
    pub fn with_strategy(mut self, strategy: WaitStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sleep `interval` between attempts
    pub fn with_sleep(self, interval: Duration) -> Self {
        self.with_strategy(WaitStrategy::Sleep(interval))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let WaitStrategy::Sleep(interval) = self.strategy {
            if interval.is_zero() {
                return Err(RendezvousError::invalid_parameter(
                    "strategy",
                    "Sleep interval must be greater than 0, use WaitStrategy::Yield instead",
                ));
            }
        }

        Ok(())
    }

    fn back_off(&self) {
        match self.strategy {
            WaitStrategy::Yield => thread::yield_now(),
            WaitStrategy::Sleep(interval) => thread::sleep(interval),
        }
    }
}

impl<T> ThreadSafeQueue<T> {
    /// Poll `try_pop` until a value arrives or the configured deadline passes.
    ///
    /// The queue lock is only held for each individual attempt.
    pub fn poll_pop(&self, config: &PollConfig) -> Result<T> {
        config.validate()?;

        let start = Instant::now();
        loop {
            if let Some(value) = self.try_pop() {
                return Ok(value);
            }

            if let Some(timeout) = config.timeout {
                let waited = start.elapsed();
                if waited >= timeout {
                    return Err(RendezvousError::timeout(waited));
                }
            }

            config.back_off();
        }
    }
}
