//! Lock-guarded millisecond sequencer

use parking_lot::Mutex;
use tracing::{trace, warn};

use crate::config::IdGeneratorConfig;

use super::state::{SequencerState, Step, Tick};
use super::time::{clamp_wall, Clock, SystemClock};
use super::wait::{next_backoff, wait_past};

/// Serializes concurrent callers into unique `(millisecond, exponent)` pairs
///
/// Milliseconds are local wall-clock milliseconds, so a daylight saving
/// fall-back is handled by the configured [`ClockRegressionPolicy`].
/// The lock only covers folding one clock reading into the state. Waiting for
/// the next millisecond happens with the lock released.
///
/// [`ClockRegressionPolicy`]: crate::ClockRegressionPolicy
#[derive(Debug)]
pub struct Sequencer<C = SystemClock> {
    state: Mutex<SequencerState>,
    clock: C,
    config: IdGeneratorConfig,
}

impl<C: Clock> Sequencer<C> {
    pub fn new(clock: C, config: IdGeneratorConfig) -> Self {
        Self {
            state: Mutex::new(SequencerState::new()),
            clock,
            config,
        }
    }

    /// Hand out the next unique tick, waiting if this millisecond is used up
    pub fn next(&self) -> Tick {
        let mut backoff_ms = 1u64;
        let mut now = self.read_clock();

        loop {
            let step = self.state.lock().advance(now, self.config.clock_regression());

            match step {
                Step::Issued(tick) => return tick,
                Step::Held { tick, behind_ms } => {
                    trace!(behind_ms, "clock behind last issued millisecond, holding");
                    return tick;
                }
                Step::Rewound { tick, behind_ms } => {
                    warn!(
                        behind_ms,
                        "clock moved backwards, identifiers may repeat for this window"
                    );
                    return tick;
                }
                Step::Exhausted { last } => {
                    trace!(millis = last, "exponents exhausted, waiting for next millisecond");
                    now = wait_past(last, backoff_ms, &self.config, || self.read_clock());
                    backoff_ms = next_backoff(backoff_ms, self.config.max_backoff_ms());
                }
            }
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Wall-clock reading limited to what the codec can represent
    #[inline(always)]
    fn read_clock(&self) -> i64 {
        clamp_wall(self.clock.now_millis())
    }
}
