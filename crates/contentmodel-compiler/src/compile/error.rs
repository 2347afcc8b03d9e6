//! Compilation error types.

/// Structural problem that prevents a model group from being compiled.
///
/// Ambiguities and PCDATA reachability are not errors; they are reported
/// alongside the compiled automaton.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A group without members.
    #[error("model group has no members")]
    EmptyGroup,

    /// A leaf references an element type the caller did not account for.
    #[error("element type #{id} is out of range for {count} element types")]
    ElementTypeOutOfRange { id: u32, count: usize },

    #[error("group has {count} members, exceeding GRPCNT {limit}")]
    GroupCountExceeded { count: usize, limit: usize },

    #[error("model has {count} group and token occurrences, exceeding GRPGTCNT {limit}")]
    GroupTokenCountExceeded { count: usize, limit: usize },

    #[error("groups are nested {level} levels deep, exceeding GRPLVL {limit}")]
    GroupLevelExceeded { level: usize, limit: usize },
}
