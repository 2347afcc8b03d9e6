//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::and_state::AndState;

impl AndState {
    #[inline]
    pub(super) fn ensure_slot(&self, slot: u32) -> usize {
        let index = slot as usize;
        if index >= self.slots.len() {
            panic!(
                "AndState: slot {} out of range (state holds {} slots)",
                slot,
                self.slots.len()
            );
        }
        index
    }
}
