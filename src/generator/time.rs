//! Time sources for identifier generation
//!
//! The sequencer counts in local wall-clock milliseconds: the local calendar
//! date and time, written as if it were UTC and converted to milliseconds
//! since 1970-01-01T00:00:00. These are the same fields the codec renders,
//! so two ticks that differ always render differently. When a time zone
//! transition sets the wall clock back, the sequencer sees a regression.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// First wall-clock millisecond a two-digit year can represent (2000-01-01)
pub const MIN_WALL_MILLIS: i64 = 946_684_800_000;

/// Last wall-clock millisecond a two-digit year can represent (2099-12-31 23:59:59.999)
pub const MAX_WALL_MILLIS: i64 = 4_102_444_799_999;

/// Source of the current local wall-clock time, in milliseconds
///
/// Implement this to drive a generator from something other than the system
/// clock, e.g. a fixed or stepped clock in tests. Readings outside
/// [`MIN_WALL_MILLIS`]..=[`MAX_WALL_MILLIS`] are clamped by the sequencer.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono::Local::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        Local::now().naive_local().and_utc().timestamp_millis()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

#[inline(always)]
pub(crate) fn clamp_wall(millis: i64) -> i64 {
    millis.clamp(MIN_WALL_MILLIS, MAX_WALL_MILLIS)
}

/// Wall-clock milliseconds as a naive date-time
#[inline]
pub(crate) fn wall_to_naive(millis: i64) -> NaiveDateTime {
    // Always in range once clamped
    DateTime::from_timestamp_millis(clamp_wall(millis))
        .unwrap_or_default()
        .naive_utc()
}

/// Resolve a wall-clock time to an instant the way decoding does
///
/// A repeated wall time maps to its earlier occurrence. A wall time skipped
/// by a transition cannot come from [`SystemClock`]; it is read as UTC.
#[inline]
pub(crate) fn resolve_local(naive: &NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(naive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_time_is_reasonable() {
        let now = SystemClock.now_millis();
        // Should be after 2024-01-01
        assert!(now > 1704067200000);
        // Should be before 2100-01-01
        assert!(now < 4102444800000);
    }

    #[test]
    fn test_system_time_is_local_wall_time() {
        let wall = Local::now().naive_local().and_utc().timestamp_millis();
        assert!((SystemClock.now_millis() - wall).abs() < 1_000);
    }

    #[test]
    fn test_wall_to_naive_keeps_fields() {
        let naive = wall_to_naive(1_606_298_343_064);
        assert_eq!(
            naive.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            "2020-11-25 09:59:03.064"
        );
    }

    #[test]
    fn test_out_of_range_readings_are_clamped() {
        assert_eq!(clamp_wall(i64::MIN), MIN_WALL_MILLIS);
        assert_eq!(clamp_wall(i64::MAX), MAX_WALL_MILLIS);
        assert_eq!(
            wall_to_naive(i64::MIN).format("%Y-%m-%d").to_string(),
            "2000-01-01"
        );
    }
}
