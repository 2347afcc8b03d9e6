//! First and last sets: the leaves a subtree is entered through and left from.
//!
//! Both exist only while the analyzer runs.

use crate::automaton::LeafId;

/// Entry leaves of a subtree, with the contextually required one (if any).
#[derive(Clone, Debug, Default)]
pub(super) struct FirstSet {
    leaves: Vec<LeafId>,
    /// Index into `leaves` of the token that must come next when nothing
    /// else does.
    required: Option<usize>,
}

impl FirstSet {
    pub(super) fn single(leaf: LeafId) -> Self {
        Self {
            leaves: vec![leaf],
            required: Some(0),
        }
    }

    pub(super) fn append(&mut self, other: &FirstSet) {
        if let Some(required) = other.required {
            debug_assert!(
                self.required.is_none(),
                "first set already has a required token"
            );
            self.required = Some(required + self.leaves.len());
        }
        self.leaves.extend_from_slice(&other.leaves);
    }

    pub(super) fn set_not_required(&mut self) {
        self.required = None;
    }

    #[inline]
    pub(super) fn leaves(&self) -> &[LeafId] {
        &self.leaves
    }

    #[inline]
    pub(super) fn required(&self) -> Option<usize> {
        self.required
    }
}

/// Exit leaves of a subtree.
#[derive(Clone, Debug, Default)]
pub(super) struct LastSet(Vec<LeafId>);

impl LastSet {
    pub(super) fn single(leaf: LeafId) -> Self {
        Self(vec![leaf])
    }

    pub(super) fn append(&mut self, other: &LastSet) {
        self.0.extend_from_slice(&other.0);
    }

    #[inline]
    pub(super) fn leaves(&self) -> &[LeafId] {
        &self.0
    }
}
