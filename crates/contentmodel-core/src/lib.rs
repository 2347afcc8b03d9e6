#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for SGML content models.
//!
//! Pure data shared by the compiler and the runtime matcher:
//! - **Occurrence / connector primitives**: `Occurrence`, `Connector`
//! - **Element references**: `ElementTypeId`, `Term`
//! - **Name table**: `ElementTypes`, interning element-type names into dense ids

mod interner;
mod invariants;

pub use interner::{ElementTypeId, ElementTypes};

// ============================================================================
// Occurrence Indicators
// ============================================================================

/// Occurrence indicator attached to a content token.
///
/// Encodes two bits: "optional" (`?`) and "repeatable" (`+`).
/// `Rep` (`*`) carries both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Occurrence {
    /// Exactly once.
    #[default]
    None,
    /// `?` - zero or one.
    Opt,
    /// `+` - one or more.
    Plus,
    /// `*` - zero or more.
    Rep,
}

impl Occurrence {
    /// Whether the token may be skipped entirely.
    #[inline]
    pub fn is_optional(self) -> bool {
        matches!(self, Self::Opt | Self::Rep)
    }

    /// Whether the token may occur more than once.
    #[inline]
    pub fn is_repeatable(self) -> bool {
        matches!(self, Self::Plus | Self::Rep)
    }

    /// Build from the two indicator bits.
    pub fn from_bits(optional: bool, repeatable: bool) -> Self {
        match (optional, repeatable) {
            (false, false) => Self::None,
            (true, false) => Self::Opt,
            (false, true) => Self::Plus,
            (true, true) => Self::Rep,
        }
    }

    /// Indicator as written in a model group declaration.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Opt => "?",
            Self::Plus => "+",
            Self::Rep => "*",
        }
    }
}

// ============================================================================
// Connectors
// ============================================================================

/// Connector joining the members of a model group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Connector {
    /// `&` - every member exactly once, in any order.
    And,
    /// `|` - exactly one member.
    Or,
    /// `,` - every member, in order.
    Seq,
}

impl Connector {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Seq => ",",
        }
    }
}

// ============================================================================
// Terms
// ============================================================================

/// What a leaf token matches: character data or one element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Term {
    /// `#PCDATA`.
    Pcdata,
    /// A declared element type.
    Element(ElementTypeId),
}

impl Term {
    /// Slot of this term in a per-term table sized with [`Term::bucket_count`].
    ///
    /// PCDATA occupies slot 0; element type `i` occupies slot `i + 1`.
    #[inline]
    pub fn bucket(self) -> usize {
        match self {
            Self::Pcdata => 0,
            Self::Element(id) => id.index() + 1,
        }
    }

    /// Number of buckets needed for `element_type_count` element types.
    #[inline]
    pub fn bucket_count(element_type_count: usize) -> usize {
        element_type_count + 1
    }

    #[inline]
    pub fn is_pcdata(self) -> bool {
        matches!(self, Self::Pcdata)
    }

    #[inline]
    pub fn element(self) -> Option<ElementTypeId> {
        match self {
            Self::Pcdata => None,
            Self::Element(id) => Some(id),
        }
    }
}

impl From<ElementTypeId> for Term {
    fn from(id: ElementTypeId) -> Self {
        Self::Element(id)
    }
}

#[cfg(test)]
mod lib_tests;
