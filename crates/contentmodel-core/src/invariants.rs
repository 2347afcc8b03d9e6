//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{ElementTypeId, ElementTypes};

impl ElementTypes {
    pub(crate) fn ensure_name(&self, id: ElementTypeId) -> &str {
        self.try_resolve(id).unwrap_or_else(|| {
            panic!(
                "ElementTypes: element type #{} not found (table holds {} names)",
                id.as_u32(),
                self.len()
            )
        })
    }
}
