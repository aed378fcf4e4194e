//! Concurrent stress tests for queues and the registry under contention

use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Barrier, Mutex,
    },
    thread,
};

use rendezvous::{Registry, Shared, ThreadSafeQueue};

#[cfg(test)]
mod concurrent_stress_tests {
    use super::*;

    /// Test: every pushed item is popped exactly once across competing consumers
    #[test]
    fn stress_try_pop_exactly_once() {
        const PRODUCERS: usize = 5;
        const ITEMS_PER_PRODUCER: usize = 100;
        const CONSUMERS: usize = 3;
        const TOTAL: usize = PRODUCERS * ITEMS_PER_PRODUCER;

        let registry = Registry::new();
        let queue = registry.acquire::<ThreadSafeQueue<String>>("test_queue").unwrap();
        let total_consumed = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::with_capacity(TOTAL)));

        let producers: Vec<_> = (0..PRODUCERS)
            .map(|i| {
                let queue = queue.clone();
                thread::spawn(move || {
                    for j in 0..ITEMS_PER_PRODUCER {
                        queue.push(format!("Item {}-{}", i, j));
                    }
                })
            })
            .collect();

        let consumers: Vec<_> = (0..CONSUMERS)
            .map(|_| {
                let queue = queue.clone();
                let total_consumed = total_consumed.clone();
                let seen = seen.clone();
                thread::spawn(move || {
                    let mut local = Vec::new();
                    while total_consumed.load(Ordering::SeqCst) < TOTAL {
                        let mut item = String::new();
                        if queue.try_pop_into(&mut item) {
                            total_consumed.fetch_add(1, Ordering::SeqCst);
                            local.push(item);
                        }
                        thread::yield_now();
                    }
                    seen.lock().unwrap().extend(local);
                })
            })
            .collect();

        for handle in producers {
            handle.join().unwrap();
        }
        for handle in consumers {
            handle.join().unwrap();
        }

        assert_eq!(total_consumed.load(Ordering::SeqCst), TOTAL);
        assert!(queue.is_empty());

        let seen = seen.lock().unwrap();
        let unique: HashSet<&String> = seen.iter().collect();
        assert_eq!(seen.len(), TOTAL);
        assert_eq!(unique.len(), TOTAL);

        let stats = queue.stats();
        assert_eq!(stats.pushed, TOTAL as u64);
        assert_eq!(stats.popped, TOTAL as u64);
    }

    /// Test: each producer's own items keep their relative order
    #[test]
    fn stress_per_producer_order_preserved() {
        const PRODUCERS: usize = 4;
        const ITEMS_PER_PRODUCER: usize = 250;

        let queue = Arc::new(ThreadSafeQueue::<(usize, usize)>::new());
        let barrier = Arc::new(Barrier::new(PRODUCERS));

        let producers: Vec<_> = (0..PRODUCERS)
            .map(|producer| {
                let queue = queue.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for seq in 0..ITEMS_PER_PRODUCER {
                        queue.push((producer, seq));
                    }
                })
            })
            .collect();
        for handle in producers {
            handle.join().unwrap();
        }

        let mut next = vec![0; PRODUCERS];
        while let Some((producer, seq)) = queue.try_pop() {
            assert_eq!(seq, next[producer]);
            next[producer] += 1;
        }
        assert!(next.iter().all(|&count| count == ITEMS_PER_PRODUCER));
    }

    /// Test: acquire/release churn on few keys never leaks entries
    #[test]
    fn stress_acquire_release_churn() {
        const THREADS: usize = 8;
        const ROUNDS: usize = 500;

        let registry = Registry::new();
        let barrier = Arc::new(Barrier::new(THREADS));

        let workers: Vec<_> = (0..THREADS)
            .map(|thread_id| {
                let registry = registry.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for round in 0..ROUNDS {
                        let key = format!("churn_{}", (thread_id + round) % 3);
                        let queue = registry.acquire::<ThreadSafeQueue<usize>>(&key).unwrap();
                        queue.push(round);
                        queue.try_pop();

                        let again = registry.acquire::<ThreadSafeQueue<usize>>(&key).unwrap();
                        assert!(Shared::ptr_eq(&queue, &again));

                        if round % 10 == 0 {
                            thread::yield_now();
                        }
                    }
                })
            })
            .collect();

        for handle in workers {
            handle.join().unwrap();
        }

        assert!(registry.is_empty());
        let stats = registry.stats();
        assert_eq!(stats.acquisitions, (THREADS * ROUNDS * 2) as u64);
        assert_eq!(stats.created + stats.reused, stats.acquisitions);
        assert_eq!(stats.live_entries, 0);
    }

    /// Test: a replacement installed while an old object is being torn down
    /// is never evicted by that teardown
    #[test]
    fn stress_replacement_survives_old_teardown() {
        const THREADS: usize = 6;
        const ROUNDS: usize = 300;

        let registry = Registry::new();
        let barrier = Arc::new(Barrier::new(THREADS));

        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                let registry = registry.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for _ in 0..ROUNDS {
                        let held = registry.acquire::<AtomicUsize>("flip").unwrap();
                        held.fetch_add(1, Ordering::Relaxed);
                        assert!(registry.contains("flip"));
                    }
                })
            })
            .collect();

        for handle in workers {
            handle.join().unwrap();
        }
        assert!(!registry.contains("flip"));
    }
}
