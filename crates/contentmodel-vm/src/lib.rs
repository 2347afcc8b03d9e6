//! Runtime matcher for compiled SGML content models.
//!
//! A [`MatchState`] walks a [`CompiledModelGroup`](contentmodel_compiler::CompiledModelGroup)
//! one element or character-data event at a time, answering whether the event
//! is allowed, which start tag is implied and whether the content may end.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{AndState, MatchState, NoopTracer, PrintTracer, Tracer, Verbosity};
