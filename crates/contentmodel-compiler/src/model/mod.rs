//! Content token tree.
//!
//! A content model is a tree of [`ContentToken`]s: leaves reference one element
//! type (or `#PCDATA`), groups join members with a [`Connector`]. Every node
//! carries its own [`Occurrence`] indicator.
//!
//! The tree is built once (by a declaration parser or [`crate::notation`]) and
//! handed to the compiler, which takes ownership of the root [`ModelGroup`].

#[cfg(test)]
mod model_tests;

use contentmodel_core::{Connector, ElementTypeId, Occurrence, Term};

/// One term of a content model.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ContentToken {
    Leaf(LeafToken),
    Group(ModelGroup),
}

/// A leaf: one element type or `#PCDATA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LeafToken {
    pub term: Term,
    pub occurrence: Occurrence,
}

/// Members joined by a connector.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ModelGroup {
    pub connector: Connector,
    pub occurrence: Occurrence,
    pub members: Vec<ContentToken>,
}

impl ContentToken {
    /// Element leaf occurring exactly once.
    pub fn element(id: ElementTypeId) -> Self {
        Self::Leaf(LeafToken {
            term: Term::Element(id),
            occurrence: Occurrence::None,
        })
    }

    /// `#PCDATA` leaf.
    ///
    /// Character data is implicitly repeatable and optional, so the leaf
    /// always carries `Rep`.
    pub fn pcdata() -> Self {
        Self::Leaf(LeafToken {
            term: Term::Pcdata,
            occurrence: Occurrence::Rep,
        })
    }

    pub fn occurrence(&self) -> Occurrence {
        match self {
            Self::Leaf(leaf) => leaf.occurrence,
            Self::Group(group) => group.occurrence,
        }
    }

    /// Replace the occurrence indicator.
    pub fn with_occurrence(mut self, occurrence: Occurrence) -> Self {
        match &mut self {
            Self::Leaf(leaf) => leaf.occurrence = occurrence,
            Self::Group(group) => group.occurrence = occurrence,
        }
        self
    }

    pub fn opt(self) -> Self {
        self.with_occurrence(Occurrence::Opt)
    }

    pub fn plus(self) -> Self {
        self.with_occurrence(Occurrence::Plus)
    }

    pub fn rep(self) -> Self {
        self.with_occurrence(Occurrence::Rep)
    }

    pub fn as_leaf(&self) -> Option<&LeafToken> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&ModelGroup> {
        match self {
            Self::Leaf(_) => None,
            Self::Group(group) => Some(group),
        }
    }

    /// Contribution to the SGML GRPGTCNT capacity: one for this token,
    /// plus the members of a group.
    pub fn group_token_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Group(group) => group.group_token_count(),
        }
    }

    /// Group nesting level below and including this token (leaves are 0).
    pub fn nesting_level(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Group(group) => group.nesting_level(),
        }
    }
}

impl From<ModelGroup> for ContentToken {
    fn from(group: ModelGroup) -> Self {
        Self::Group(group)
    }
}

impl From<LeafToken> for ContentToken {
    fn from(leaf: LeafToken) -> Self {
        Self::Leaf(leaf)
    }
}

impl ModelGroup {
    pub fn new(connector: Connector, members: Vec<ContentToken>) -> Self {
        Self {
            connector,
            occurrence: Occurrence::None,
            members,
        }
    }

    pub fn seq(members: impl IntoIterator<Item = ContentToken>) -> Self {
        Self::new(Connector::Seq, members.into_iter().collect())
    }

    pub fn or(members: impl IntoIterator<Item = ContentToken>) -> Self {
        Self::new(Connector::Or, members.into_iter().collect())
    }

    pub fn and(members: impl IntoIterator<Item = ContentToken>) -> Self {
        Self::new(Connector::And, members.into_iter().collect())
    }

    pub fn with_occurrence(mut self, occurrence: Occurrence) -> Self {
        self.occurrence = occurrence;
        self
    }

    pub fn opt(self) -> Self {
        self.with_occurrence(Occurrence::Opt)
    }

    pub fn plus(self) -> Self {
        self.with_occurrence(Occurrence::Plus)
    }

    pub fn rep(self) -> Self {
        self.with_occurrence(Occurrence::Rep)
    }

    #[inline]
    pub fn connector(&self) -> Connector {
        self.connector
    }

    #[inline]
    pub fn members(&self) -> &[ContentToken] {
        &self.members
    }

    pub fn group_token_count(&self) -> usize {
        1 + self
            .members
            .iter()
            .map(ContentToken::group_token_count)
            .sum::<usize>()
    }

    /// Nesting level: 1 for a group of leaves, +1 per enclosed group layer.
    pub fn nesting_level(&self) -> usize {
        1 + self
            .members
            .iter()
            .map(ContentToken::nesting_level)
            .max()
            .unwrap_or(0)
    }

    /// Whether any leaf in the group is `#PCDATA`.
    pub fn contains_pcdata(&self) -> bool {
        self.members.iter().any(|member| match member {
            ContentToken::Leaf(leaf) => leaf.term.is_pcdata(),
            ContentToken::Group(group) => group.contains_pcdata(),
        })
    }
}
