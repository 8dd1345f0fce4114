//! Sequencer state: last issued millisecond and the counter within it
//!
//! Only ever touched under the sequencer's lock

use crate::config::ClockRegressionPolicy;

/// Highest exponent a single millisecond can hand out
pub const MAX_EXPONENT: u16 = 999;

/// A unique `(millisecond, exponent)` pair handed out by the sequencer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tick {
    millis: i64,
    exponent: u16,
}

impl Tick {
    #[inline(always)]
    pub const fn new(millis: i64, exponent: u16) -> Self {
        Self { millis, exponent }
    }

    /// Local wall-clock milliseconds, see [`Clock`](crate::Clock)
    #[inline(always)]
    pub const fn millis(self) -> i64 {
        self.millis
    }

    #[inline(always)]
    pub const fn exponent(self) -> u16 {
        self.exponent
    }
}

/// Outcome of one attempt to advance the state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Issued(Tick),
    /// Clock read behind `last`; issued from the last millisecond instead
    Held { tick: Tick, behind_ms: i64 },
    /// Clock read behind `last`; adopted the earlier time
    Rewound { tick: Tick, behind_ms: i64 },
    /// Every exponent of `last` is used
    Exhausted { last: i64 },
}

#[derive(Debug)]
pub(crate) struct SequencerState {
    last_millis: i64,
    counter: u16,
}

impl SequencerState {
    pub(crate) const fn new() -> Self {
        Self {
            last_millis: i64::MIN,
            counter: 0,
        }
    }

    /// Fold one clock reading into the state
    pub(crate) fn advance(&mut self, now: i64, policy: ClockRegressionPolicy) -> Step {
        if now > self.last_millis {
            return Step::Issued(self.claim(now));
        }

        if now < self.last_millis {
            let behind_ms = self.last_millis - now;
            return match policy {
                ClockRegressionPolicy::Tolerate => Step::Rewound {
                    tick: self.claim(now),
                    behind_ms,
                },
                ClockRegressionPolicy::Wait => match self.increment() {
                    Some(tick) => Step::Held { tick, behind_ms },
                    None => Step::Exhausted {
                        last: self.last_millis,
                    },
                },
            };
        }

        match self.increment() {
            Some(tick) => Step::Issued(tick),
            None => Step::Exhausted {
                last: self.last_millis,
            },
        }
    }

    #[inline(always)]
    fn claim(&mut self, millis: i64) -> Tick {
        self.last_millis = millis;
        self.counter = 0;
        Tick::new(millis, 0)
    }

    #[inline(always)]
    fn increment(&mut self) -> Option<Tick> {
        if self.counter >= MAX_EXPONENT {
            return None;
        }
        self.counter += 1;
        Some(Tick::new(self.last_millis, self.counter))
    }
}
