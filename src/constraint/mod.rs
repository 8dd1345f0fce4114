//! Predicates a candidate identifier must satisfy
//!
//! Constraints only filter: they never change which candidate the generator
//! produces, only whether it is accepted.

mod partition;

pub use partition::{HashCodePartitioner, KeyPartitioner, PartitionValidator};

use std::sync::Arc;

use crate::id::Id;

/// A side-effect free check over a candidate identifier
///
/// Implemented for any `Fn(&Id) -> bool + Send + Sync`, so closures can be
/// passed directly.
pub trait Constraint: Send + Sync {
    fn evaluate(&self, id: &Id) -> bool;
}

impl<F> Constraint for F
where
    F: Fn(&Id) -> bool + Send + Sync,
{
    #[inline]
    fn evaluate(&self, id: &Id) -> bool {
        self(id)
    }
}

/// Shared handle to a constraint, as kept in a generator's global set
pub type SharedConstraint = Arc<dyn Constraint>;

