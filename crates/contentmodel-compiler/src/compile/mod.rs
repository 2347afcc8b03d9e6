//! Compilation of a model group into a transition automaton.
//!
//! Two passes:
//! - `analyze`: bottom-up first/last/optional computation that allocates the
//!   leaf arena and appends follow edges (sequence, repetition, AND)
//! - `finish`: per-leaf deduplication, PCDATA classification, ambiguity and
//!   PCDATA reachability detection
//!
//! Capacity limits are checked before either pass runs.

mod analyze;
mod compiler;
mod error;
mod finish;
mod limits;
mod sets;

#[cfg(test)]
mod compile_tests;
#[cfg(test)]
mod finish_tests;

pub use compiler::{Compilation, Compiler, CompilerBuilder};
pub use error::CompileError;
pub use limits::ModelLimits;
