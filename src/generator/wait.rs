//! Waiting out an exhausted millisecond
//!
//! The sequencer waits here once every exponent of its last millisecond is
//! used, either because callers outran the clock or because the clock was set
//! back and the held millisecond ran dry. Waiting is a bounded spin on the
//! clock followed by sleeps whose length doubles up to the configured cap.

use std::thread;
use std::time::Duration;

use crate::config::IdGeneratorConfig;

/// Block until `read()` returns a millisecond later than `last`
///
/// Returns that reading so the caller can fold it into the state without
/// reading the clock again. `backoff_ms` is the first sleep if spinning does
/// not see the clock move.
pub fn wait_past<F>(last: i64, backoff_ms: u64, config: &IdGeneratorConfig, read: F) -> i64
where
    F: Fn() -> i64,
{
    if let Some(reading) = spin_past(last, config, &read) {
        return reading;
    }
    sleep_past(last, backoff_ms, config.max_backoff_ms(), &read)
}

/// Spin for at most `spin_loops` readings, yielding every `spin_yield_every`
fn spin_past<F>(last: i64, config: &IdGeneratorConfig, read: &F) -> Option<i64>
where
    F: Fn() -> i64,
{
    if !config.spin_enabled() {
        return None;
    }

    let yield_every = config.spin_yield_every();
    (0..config.spin_loops()).find_map(|i| {
        let reading = read();
        if reading > last {
            return Some(reading);
        }
        std::hint::spin_loop();
        if yield_every != 0 && (i + 1) % yield_every == 0 {
            thread::yield_now();
        }
        None
    })
}

fn sleep_past<F>(last: i64, mut backoff_ms: u64, max_backoff_ms: u64, read: &F) -> i64
where
    F: Fn() -> i64,
{
    loop {
        thread::sleep(Duration::from_millis(backoff_ms));
        let reading = read();
        if reading > last {
            return reading;
        }
        backoff_ms = next_backoff(backoff_ms, max_backoff_ms);
    }
}

/// Double `current`, never beyond `max`
#[inline(always)]
pub const fn next_backoff(current: u64, max: u64) -> u64 {
    let next = current.saturating_mul(2);
    if next > max {
        max
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    #[test]
    fn test_next_backoff() {
        assert_eq!(next_backoff(1, 100), 2);
        assert_eq!(next_backoff(50, 100), 100);
        assert_eq!(next_backoff(100, 100), 100);
        assert_eq!(next_backoff(200, 100), 100);
        assert_eq!(next_backoff(1, 1), 1);
    }

    #[test]
    fn test_spin_sees_next_millisecond() {
        let config = IdGeneratorConfig::builder().spin_loops(10).build();
        assert_eq!(wait_past(100, 1, &config, || 101), 101);
    }

    #[test]
    fn test_spin_gives_up_after_its_budget() {
        let config = IdGeneratorConfig::builder().spin_loops(8).build();
        let reads = AtomicI64::new(0);
        let read = || {
            reads.fetch_add(1, Ordering::Relaxed);
            100
        };
        assert_eq!(spin_past(100, &config, &read), None);
        assert_eq!(reads.load(Ordering::Relaxed), 8);
    }

    #[test]
    fn test_spin_disabled_goes_straight_to_sleep() {
        let config = IdGeneratorConfig::builder().enable_spin(false).build();
        let reads = AtomicI64::new(0);
        let reading = wait_past(100, 1, &config, || {
            99 + reads.fetch_add(1, Ordering::Relaxed)
        });
        // 99 and 100 do not pass `last`; every read followed a sleep
        assert_eq!(reading, 101);
        assert_eq!(reads.load(Ordering::Relaxed), 3);
    }
}
