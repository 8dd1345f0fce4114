//! IdGeneratorConfig builder for constructing configuration

use super::{ClockRegressionPolicy, ConfigError, IdGeneratorConfig};

/// Default configuration values
pub(super) const DEFAULT_MAX_ATTEMPTS: u32 = 100;
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;
pub(super) const DEFAULT_MAX_BACKOFF_MS: u64 = 100;

/// Builder for IdGeneratorConfig
#[derive(Debug)]
pub struct IdGeneratorConfigBuilder {
    pub(super) max_attempts: u32,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
    pub(super) max_backoff_ms: u64,
    pub(super) clock_regression: ClockRegressionPolicy,
    pub(super) unchecked_fallback: bool,
}

impl IdGeneratorConfigBuilder {
    /// Create a new IdGeneratorConfigBuilder with default values
    pub fn new() -> Self {
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

    /// Set how many candidates constrained generation may try before giving up
    pub fn max_attempts(mut self, attempts: u32) -> Result<Self, ConfigError> {
        if attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts { attempts });
        }
        self.max_attempts = attempts;
        Ok(self)
    }

    /// Enable or disable micro spin before sleep on counter exhaustion
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Cap for the exponential sleep backoff, in milliseconds
    pub fn max_backoff_ms(mut self, ms: u64) -> Result<Self, ConfigError> {
        if ms == 0 {
            return Err(ConfigError::InvalidMaxBackoff { ms });
        }
        self.max_backoff_ms = ms;
        Ok(self)
    }

    /// Choose what happens when the clock is observed moving backwards
    pub const fn clock_regression(mut self, policy: ClockRegressionPolicy) -> Self {
        self.clock_regression = policy;
        self
    }

    /// Return the last unchecked candidate when constraints are exhausted
    /// and the caller did not ask for a hard failure
    pub const fn unchecked_fallback(mut self, enable: bool) -> Self {
        self.unchecked_fallback = enable;
        self
    }

    /// Build the final IdGeneratorConfig
    pub fn build(self) -> IdGeneratorConfig {
        IdGeneratorConfig::from_builder(self)
    }
}

impl Default for IdGeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
