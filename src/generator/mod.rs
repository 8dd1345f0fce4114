//! Identifier generator
//!
//! Split into modules for testability:
//! - `state` - Last millisecond and counter, folded under the lock
//! - `sequencer` - Lock-guarded sequencer handing out unique ticks
//! - `time` - Clock abstraction and wall-clock implementation
//! - `wait` - Spin and backoff strategies
//! - `generate` - Plain and constrained generation

mod generate;
mod sequencer;
mod state;
mod time;
mod wait;

use parking_lot::RwLock;
use tracing::debug;

use crate::codec;
use crate::config::IdGeneratorConfig;
use crate::constraint::{Constraint, SharedConstraint};
use crate::error::IdError;
use crate::id::Id;
use crate::node::NodeId;

pub use sequencer::Sequencer;
pub use state::{Tick, MAX_EXPONENT};
pub use time::{Clock, SystemClock, MAX_WALL_MILLIS, MIN_WALL_MILLIS};

use time::{resolve_local, wall_to_naive};

/// Generates identifiers for one node
///
/// Owns the sequencer state and the node identity; share it behind an `Arc`
/// or a `static` to generate from several threads.
pub struct IdGenerator<C = SystemClock> {
    node: NodeId,
    config: IdGeneratorConfig,
    sequencer: Sequencer<C>,
    global_constraints: RwLock<Vec<SharedConstraint>>,
}

impl IdGenerator<SystemClock> {
    /// Create with default configuration
    pub fn new(node_id: u32) -> Result<Self, IdError> {
        Self::with_config(node_id, IdGeneratorConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(node_id: u32, config: IdGeneratorConfig) -> Result<Self, IdError> {
        let node = NodeId::new(node_id)?;
        Ok(Self::with_clock(node, config, SystemClock))
    }
}

impl<C: Clock> IdGenerator<C> {
    /// Create with an explicit clock
    pub fn with_clock(node: NodeId, config: IdGeneratorConfig, clock: C) -> Self {
        debug!(
            node = node.get(),
            max_attempts = config.max_attempts(),
            clock_regression = ?config.clock_regression(),
            "created identifier generator"
        );
        Self {
            node,
            config,
            sequencer: Sequencer::new(clock, config),
            global_constraints: RwLock::new(Vec::new()),
        }
    }

    #[inline]
    pub fn node_id(&self) -> NodeId {
        self.node
    }

    #[inline]
    pub fn config(&self) -> &IdGeneratorConfig {
        &self.config
    }

    #[inline]
    pub fn sequencer(&self) -> &Sequencer<C> {
        &self.sequencer
    }

    /// Add a constraint checked by every `generate_with_constraints` call
    pub fn register_global_constraint<T>(&self, constraint: T)
    where
        T: Constraint + 'static,
    {
        self.global_constraints
            .write()
            .push(std::sync::Arc::new(constraint));
    }

    pub fn register_global_constraints<I>(&self, constraints: I)
    where
        I: IntoIterator<Item = SharedConstraint>,
    {
        self.global_constraints.write().extend(constraints);
    }

    pub fn global_constraint_count(&self) -> usize {
        self.global_constraints.read().len()
    }

    /// Render a tick; the instant is resolved exactly as `codec::decode` would
    #[inline]
    pub(crate) fn assemble(&self, prefix: &str, tick: Tick) -> Id {
        let wall = wall_to_naive(tick.millis());
        let encoded = codec::encode(prefix, &wall, self.node.get(), tick.exponent());
        let generated_at = resolve_local(&wall);
        Id::from_parts(
            encoded,
            prefix.len(),
            generated_at,
            self.node.get(),
            tick.exponent(),
        )
    }
}

impl<C> std::fmt::Debug for IdGenerator<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator")
            .field("node", &self.node)
            .field("config", &self.config)
            .field("global_constraints", &self.global_constraints.read().len())
            .finish_non_exhaustive()
    }
}
