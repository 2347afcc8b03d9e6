//! Matching engine.
//!
//! The compiled automaton is shared read-only; all mutable matching state
//! (current leaf, AND-group progress, depth threshold) lives in `MatchState`.

mod and_state;
mod invariants;
mod match_state;
mod trace;


pub use and_state::AndState;
pub use match_state::MatchState;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
