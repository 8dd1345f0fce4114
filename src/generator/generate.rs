//! Identifier generation
//!
//! Plain generation is one sequencer round trip. Constrained generation keeps
//! drawing fresh candidates until every constraint accepts one or the attempt
//! ceiling is reached.

use tracing::debug;

use crate::constraint::Constraint;
use crate::id::Id;

use super::time::Clock;
use super::IdGenerator;

impl<C: Clock> IdGenerator<C> {
    /// Generate a new identifier with the given prefix
    ///
    /// The prefix is opaque and is expected to be non-empty. An empty prefix
    /// is still accepted: it yields the bare 22 digit suffix, which decodes
    /// back with an empty prefix.
    #[inline]
    pub fn generate(&self, prefix: &str) -> Id {
        let tick = self.sequencer.next();
        self.assemble(prefix, tick)
    }

    /// Generate an identifier accepted by the global constraints and by
    /// every constraint in `constraints`
    ///
    /// Returns `None` once the configured attempt ceiling is spent. With
    /// `fail_on_exhaustion == false` and `unchecked_fallback` enabled in the
    /// config, the last candidate is returned unchecked instead.
    pub fn generate_with_constraints(
        &self,
        prefix: &str,
        constraints: &[&dyn Constraint],
        fail_on_exhaustion: bool,
    ) -> Option<Id> {
        self.generate_checked(prefix, constraints, true, fail_on_exhaustion)
    }

    /// Like [`generate_with_constraints`](Self::generate_with_constraints),
    /// skipping the global constraints
    pub fn generate_with_local_constraints(
        &self,
        prefix: &str,
        constraints: &[&dyn Constraint],
        fail_on_exhaustion: bool,
    ) -> Option<Id> {
        self.generate_checked(prefix, constraints, false, fail_on_exhaustion)
    }

    fn generate_checked(
        &self,
        prefix: &str,
        constraints: &[&dyn Constraint],
        include_global: bool,
        fail_on_exhaustion: bool,
    ) -> Option<Id> {
        // Snapshot so constraints run without the registry lock held
        let globals = if include_global {
            self.global_constraints.read().clone()
        } else {
            Vec::new()
        };

        let max_attempts = self.config.max_attempts();
        let mut last = None;

        for _ in 0..max_attempts {
            let candidate = self.generate(prefix);
            let accepted = globals.iter().all(|c| c.evaluate(&candidate))
                && constraints.iter().all(|c| c.evaluate(&candidate));
            if accepted {
                return Some(candidate);
            }
            last = Some(candidate);
        }

        debug!(
            prefix,
            attempts = max_attempts,
            fail_on_exhaustion,
            "no candidate satisfied the constraints"
        );

        if !fail_on_exhaustion && self.config.unchecked_fallback() {
            return last;
        }
        None
    }
}
