//! Element-type name table.
//!
//! Converts element-type names into dense integer handles (`ElementTypeId`).
//! Ids are assigned in insertion order starting at 0, so the table length is
//! the element-type count a compiled model is sized against.

use indexmap::IndexSet;

use crate::Term;

/// A lightweight handle to an interned element-type name.
///
/// Comparing two ids is O(1). Ids are ordered by insertion order,
/// not lexicographically; use `ElementTypes::resolve` if you need name ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct ElementTypeId(u32);

impl ElementTypeId {
    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Create an id from a raw index. Use only for deserialization or tables
    /// maintained outside `ElementTypes`.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

/// Element-type table. Deduplicates names and returns cheap `ElementTypeId` handles.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ElementTypes {
    names: IndexSet<String>,
}

impl ElementTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a name, returning its id.
    /// If the name was already interned, returns the existing id.
    pub fn intern(&mut self, name: &str) -> ElementTypeId {
        if let Some(index) = self.names.get_index_of(name) {
            return ElementTypeId(index as u32);
        }
        let (index, _) = self.names.insert_full(name.to_owned());
        ElementTypeId(index as u32)
    }

    /// Intern an owned name, avoiding a clone if not already present.
    pub fn intern_owned(&mut self, name: String) -> ElementTypeId {
        let (index, _) = self.names.insert_full(name);
        ElementTypeId(index as u32)
    }

    /// Look up a name without interning it.
    pub fn get(&self, name: &str) -> Option<ElementTypeId> {
        self.names
            .get_index_of(name)
            .map(|index| ElementTypeId(index as u32))
    }

    /// Resolve an id back to its name.
    ///
    /// # Panics
    /// Panics if the id was not created by this table.
    #[inline]
    pub fn resolve(&self, id: ElementTypeId) -> &str {
        self.ensure_name(id)
    }

    /// Try to resolve an id, returning None if invalid.
    #[inline]
    pub fn try_resolve(&self, id: ElementTypeId) -> Option<&str> {
        self.names.get_index(id.index()).map(|s| s.as_str())
    }

    /// Render a term for diagnostics and dumps.
    ///
    /// Unknown element ids render as `#<index>` rather than panicking.
    pub fn display(&self, term: Term) -> String {
        match term {
            Term::Pcdata => "#PCDATA".to_string(),
            Term::Element(id) => match self.try_resolve(id) {
                Some(name) => name.to_string(),
                None => format!("#{}", id.as_u32()),
            },
        }
    }

    /// Number of interned names, i.e. the element-type count.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all names with their ids.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (ElementTypeId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, s)| (ElementTypeId(i as u32), s.as_str()))
    }
}
