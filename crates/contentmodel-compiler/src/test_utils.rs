//! Test utilities.

use contentmodel_core::ElementTypes;

use crate::{Compilation, CompileError, Compiler, ModelLimits};

/// Compiled model plus the element type table its names were interned into.
pub struct Compiled {
    pub compilation: Compilation,
    pub types: ElementTypes,
}

impl Compiled {
    pub fn dump(&self) -> String {
        self.compilation.group.dump(&self.types)
    }

    /// Render ambiguities as `from: to1 / to2 @depth` lines using leaf names.
    pub fn ambiguities(&self) -> Vec<String> {
        let group = &self.compilation.group;
        let name = |id| {
            let leaf = group.leaf(id);
            match leaf.term() {
                Some(term) => format!("L{} {}", id.as_u32(), self.types.display(term)),
                None => "L0 <initial>".to_string(),
            }
        };
        self.compilation
            .ambiguities
            .iter()
            .map(|a| format!("{}: {} / {} @{}", name(a.from), name(a.to1), name(a.to2), a.and_depth))
            .collect()
    }
}

/// Compile notation without capacity limits, panicking on any error.
pub fn compile(source: &str) -> Compiled {
    try_compile(source).expect("model should compile")
}

pub fn try_compile(source: &str) -> Result<Compiled, CompileError> {
    let mut types = ElementTypes::new();
    let compiler = Compiler::builder().limits(ModelLimits::unlimited()).build();
    let compilation = match compiler.compile_notation(source, &mut types) {
        Ok(compilation) => compilation,
        Err(crate::Error::Compile(err)) => return Err(err),
        Err(err) => panic!("notation should parse: {err}"),
    };
    Ok(Compiled { compilation, types })
}
