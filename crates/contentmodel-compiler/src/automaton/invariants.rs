//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::{AndGroup, AndGroupId, CompiledModelGroup, Leaf, LeafId};

impl CompiledModelGroup {
    pub(crate) fn ensure_leaf(&self, id: LeafId) -> &Leaf {
        self.leaves.get(id.index()).unwrap_or_else(|| {
            panic!(
                "CompiledModelGroup: leaf {} not found (automaton has {} leaves)",
                id.as_u32(),
                self.leaves.len()
            )
        })
    }

    pub(crate) fn ensure_and_group(&self, id: AndGroupId) -> &AndGroup {
        self.and_groups.get(id.index()).unwrap_or_else(|| {
            panic!(
                "CompiledModelGroup: AND group {} not found (automaton has {} groups)",
                id.index(),
                self.and_groups.len()
            )
        })
    }
}
