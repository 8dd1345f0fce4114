//! Shared test utilities

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use crate::Clock;

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Clock advancing one millisecond every `every` reads
#[derive(Debug)]
pub struct SteppingClock {
    base: i64,
    every: u64,
    reads: AtomicU64,
}

impl SteppingClock {
    pub fn new(base: i64, every: u64) -> Self {
        Self {
            base,
            every,
            reads: AtomicU64::new(0),
        }
    }

    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for SteppingClock {
    fn now_millis(&self) -> i64 {
        let read = self.reads.fetch_add(1, Ordering::SeqCst);
        self.base + (read / self.every) as i64
    }
}

/// Clock whose n-th reading is `script(n)`
pub struct ScriptedClock<F> {
    script: F,
    reads: AtomicU64,
}

impl<F: Fn(u64) -> i64> ScriptedClock<F> {
    pub fn new(script: F) -> Self {
        Self {
            script,
            reads: AtomicU64::new(0),
        }
    }
}

impl<F: Fn(u64) -> i64> Clock for ScriptedClock<F> {
    fn now_millis(&self) -> i64 {
        (self.script)(self.reads.fetch_add(1, Ordering::SeqCst))
    }
}

/// Assert that all items in the collection are unique
pub fn assert_unique<T: Eq + Hash + std::fmt::Debug>(items: &[T], expected_count: usize) {
    let set: HashSet<_> = items.iter().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}
