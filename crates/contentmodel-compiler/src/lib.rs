//! SGML content-model compiler.
//!
//! This crate turns a content model into a transition automaton:
//! - `model` - the content-token tree (leaves and connector groups)
//! - `notation` - compact DTD-style notation such as `(a, (b | c)*, d?)`
//! - `compile` - analysis and finishing passes, capacity limits
//! - `automaton` - the compiled leaf arena, AND-group table and dump
//!
//! Matching a compiled automaton against element events lives in the
//! `contentmodel-vm` crate.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod automaton;
pub mod compile;
pub mod model;
pub mod notation;

#[cfg(test)]
pub mod test_utils;

use contentmodel_core::ElementTypes;

pub use automaton::{
    AndGroup, AndGroupId, AndMembership, CompiledModelGroup, ContentModelAmbiguity, Leaf, LeafId,
    PcdataTransition, Transition,
};
pub use compile::{Compilation, CompileError, Compiler, CompilerBuilder, ModelLimits};
pub use model::{ContentToken, LeafToken, ModelGroup};
pub use notation::{
    DEFAULT_NESTING_LIMIT, NotationError, parse_model, parse_model_with_nesting_limit,
};

/// Errors from compiling a model written in notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Result type for notation-level compilation.
pub type Result<T> = std::result::Result<T, Error>;

impl Compiler {
    /// Parse `source`, interning its element names into `types`, and compile
    /// it against every type interned so far.
    pub fn compile_notation(&self, source: &str, types: &mut ElementTypes) -> Result<Compilation> {
        let model = parse_model(source, types)?;
        Ok(self.compile(model, types.len())?)
    }
}
