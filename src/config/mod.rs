//! Configuration for the identifier generator

mod builder;

use thiserror::Error;

pub use builder::IdGeneratorConfigBuilder;
use builder::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_BACKOFF_MS, DEFAULT_SPIN_ENABLED, DEFAULT_SPIN_LOOPS,
    DEFAULT_SPIN_YIELD_EVERY,
};

/// Errors related to `IdGeneratorConfig` builder validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Max attempts {attempts} must be at least 1")]
    InvalidMaxAttempts { attempts: u32 },
    #[error("Max backoff {ms}ms must be at least 1ms")]
    InvalidMaxBackoff { ms: u64 },
}

/// Behaviour when the clock reads earlier than the last millisecond issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockRegressionPolicy {
    /// Keep issuing from the last millisecond's remaining counter values and
    /// wait for the clock to catch up once they run out. Uniqueness holds.
    #[default]
    Wait,
    /// Adopt the earlier time and reset the counter. Identifiers issued while
    /// the clock replays an already-used window may collide.
    Tolerate,
}

/// Configuration for the identifier generator
#[derive(Debug, Clone, Copy)]
pub struct IdGeneratorConfig {
    max_attempts: u32,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
    max_backoff_ms: u64,
    clock_regression: ClockRegressionPolicy,
    unchecked_fallback: bool,
}

impl IdGeneratorConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: IdGeneratorConfigBuilder) -> Self {
        Self {
            max_attempts: b.max_attempts,
            spin_enabled: b.spin_enabled,
            spin_loops: b.spin_loops,
            spin_yield_every: b.spin_yield_every,
            max_backoff_ms: b.max_backoff_ms,
            clock_regression: b.clock_regression,
            unchecked_fallback: b.unchecked_fallback,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> IdGeneratorConfigBuilder {
        IdGeneratorConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub const fn max_backoff_ms(&self) -> u64 {
        self.max_backoff_ms
    }

    #[inline(always)]
    pub const fn clock_regression(&self) -> ClockRegressionPolicy {
        self.clock_regression
    }

    #[inline(always)]
    pub const fn unchecked_fallback(&self) -> bool {
        self.unchecked_fallback
    }
}

impl Default for IdGeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            max_backoff_ms: DEFAULT_MAX_BACKOFF_MS,
            clock_regression: ClockRegressionPolicy::Wait,
            unchecked_fallback: false,
        }
    }
}
