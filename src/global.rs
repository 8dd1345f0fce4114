//! Process-wide generator handle
//!
//! The node identity is supplied once at startup by whatever assigns nodes in
//! the fleet. After that any thread may generate through these functions.

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::codec;
use crate::config::IdGeneratorConfig;
use crate::constraint::Constraint;
use crate::error::IdError;
use crate::generator::{IdGenerator, SystemClock};
use crate::id::Id;
use crate::node::NodeId;

static GENERATOR: OnceCell<IdGenerator<SystemClock>> = OnceCell::new();

/// Set the node identity for this process
///
/// Repeating the call with the same node succeeds; a different node is
/// rejected.
pub fn initialize(node_id: u32) -> Result<(), IdError> {
    initialize_with_config(node_id, IdGeneratorConfig::default())
}

/// Set the node identity and generator configuration for this process
///
/// The configuration of the first successful call wins.
pub fn initialize_with_config(node_id: u32, config: IdGeneratorConfig) -> Result<(), IdError> {
    let node = NodeId::new(node_id)?;
    let generator = GENERATOR.get_or_init(|| {
        debug!(node = node.get(), "initializing process-wide generator");
        IdGenerator::with_clock(node, config, SystemClock)
    });

    let current = generator.node_id();
    if current != node {
        return Err(IdError::NodeAlreadyInitialized {
            current: current.get(),
            requested: node.get(),
        });
    }
    Ok(())
}

/// Node identity of this process, if initialized
pub fn node_id() -> Option<NodeId> {
    GENERATOR.get().map(IdGenerator::node_id)
}

/// The process-wide generator
pub fn generator() -> Result<&'static IdGenerator<SystemClock>, IdError> {
    GENERATOR.get().ok_or(IdError::NotInitialized)
}

pub fn generate(prefix: &str) -> Result<Id, IdError> {
    Ok(generator()?.generate(prefix))
}

/// See [`IdGenerator::generate_with_constraints`]
pub fn generate_with_constraints(
    prefix: &str,
    constraints: &[&dyn Constraint],
    fail_on_exhaustion: bool,
) -> Result<Option<Id>, IdError> {
    Ok(generator()?.generate_with_constraints(prefix, constraints, fail_on_exhaustion))
}

/// See [`IdGenerator::generate_with_local_constraints`]
pub fn generate_with_local_constraints(
    prefix: &str,
    constraints: &[&dyn Constraint],
    fail_on_exhaustion: bool,
) -> Result<Option<Id>, IdError> {
    Ok(generator()?.generate_with_local_constraints(prefix, constraints, fail_on_exhaustion))
}

pub fn register_global_constraint<T>(constraint: T) -> Result<(), IdError>
where
    T: Constraint + 'static,
{
    generator()?.register_global_constraint(constraint);
    Ok(())
}

/// Parse an identifier string; works without initialization
#[inline]
pub fn parse(s: &str) -> Option<Id> {
    codec::parse(s)
}
