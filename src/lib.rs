//! # seqid
//!
//! Sortable identifiers for correlating work across independent processes.
//!
//! An identifier is a caller-chosen prefix followed by a fixed 22 digit
//! suffix: the generation time down to the millisecond, the generating node
//! and a per-millisecond sequence number (the *exponent*). Identifiers are
//! reversible; [`parse`] recovers every field from the string.
//!
//! - 🔒 Thread-safe, one short critical section per identifier
//! - 🌐 Unique across nodes with distinct node identities
//! - 🧩 Constraint-driven generation, e.g. restricting to owned partitions
//!
//! ```
//! use seqid::{HashCodePartitioner, IdGenerator, PartitionValidator};
//!
//! let generator = IdGenerator::new(23).unwrap();
//! let id = generator.generate("ORD");
//! let parsed = seqid::parse(id.id()).unwrap();
//! assert_eq!(parsed.node(), 23);
//!
//! let owned = PartitionValidator::new(4, HashCodePartitioner::new(16).unwrap());
//! let sharded = generator.generate_with_constraints("ORD", &[&owned], true);
//! assert!(sharded.is_some());
//! ```

#![forbid(unsafe_code)]

pub mod codec;
mod config;
pub mod constraint;
mod error;
pub mod global;
mod generator;
mod id;
mod node;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{ClockRegressionPolicy, ConfigError, IdGeneratorConfig, IdGeneratorConfigBuilder};
pub use constraint::{
    Constraint, HashCodePartitioner, KeyPartitioner, PartitionValidator, SharedConstraint,
};
pub use error::{IdError, ParseError};
pub use generator::{
    Clock, IdGenerator, Sequencer, SystemClock, Tick, MAX_EXPONENT, MAX_WALL_MILLIS, MIN_WALL_MILLIS,
};
pub use id::Id;
pub use node::NodeId;

pub use codec::{decode, encode, parse, SUFFIX_LEN};
pub use global::{generate, generate_with_constraints, initialize};
