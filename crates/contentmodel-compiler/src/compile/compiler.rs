//! Compiler entry points.

use crate::automaton::{CompiledModelGroup, ContentModelAmbiguity};
use crate::model::ModelGroup;

use super::analyze::Analyzer;
use super::error::CompileError;
use super::finish;
use super::limits::ModelLimits;

/// Content-model compiler.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    limits: ModelLimits,
}

/// Builder for `Compiler`.
#[derive(Clone, Debug, Default)]
pub struct CompilerBuilder {
    limits: ModelLimits,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity limits checked before analysis.
    pub fn limits(mut self, limits: ModelLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            limits: self.limits,
        }
    }
}

/// Output of a successful compilation.
#[derive(Clone, Debug)]
pub struct Compilation {
    pub group: CompiledModelGroup,
    /// Ambiguities in detection order (source leaf order).
    pub ambiguities: Vec<ContentModelAmbiguity>,
    /// Some `#PCDATA` token of a mixed model cannot be reached from every
    /// position that should allow it.
    pub pcdata_unreachable: bool,
}

impl Compilation {
    #[inline]
    pub fn is_ambiguous(&self) -> bool {
        !self.ambiguities.is_empty()
    }
}

impl Compiler {
    /// Create a builder for Compiler.
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    pub fn limits(&self) -> &ModelLimits {
        &self.limits
    }

    /// Compile `model` for a document type with `element_type_count` element
    /// types. Every element leaf must reference an id below that count.
    pub fn compile(
        &self,
        model: ModelGroup,
        element_type_count: usize,
    ) -> Result<Compilation, CompileError> {
        self.limits.check(&model)?;
        let contains_pcdata = model.contains_pcdata();

        let mut analyzer = Analyzer::new(element_type_count);
        let root = analyzer.analyze_root(&model)?;
        analyzer.connect_root(&root);

        let Analyzer {
            mut leaves,
            and_groups,
            and_state_size,
            ..
        } = analyzer;

        let findings = finish::finish(&mut leaves, &and_groups, element_type_count);

        let group = CompiledModelGroup {
            model,
            leaves,
            and_groups,
            and_state_size,
            contains_pcdata,
        };

        Ok(Compilation {
            group,
            ambiguities: findings.ambiguities,
            // Element-only models have no character data to strand.
            pcdata_unreachable: contains_pcdata && findings.pcdata_unreachable,
        })
    }
}

impl CompiledModelGroup {
    /// Compile with the reference capacity limits.
    pub fn compile(
        model: ModelGroup,
        element_type_count: usize,
    ) -> Result<Compilation, CompileError> {
        Compiler::default().compile(model, element_type_count)
    }
}
