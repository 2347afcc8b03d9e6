//! Compiled content-model automaton.
//!
//! The automaton is an arena of [`Leaf`] positions addressed by [`LeafId`].
//! Index 0 is the synthetic initial position; the remaining leaves follow the
//! left-to-right order of the model's leaf tokens. Transitions and AND-group
//! metadata reference other arena entries by index only.
//!
//! A [`CompiledModelGroup`] is immutable once built and is shared read-only by
//! every matcher walking it.

mod dump;
mod invariants;

#[cfg(test)]
mod dump_tests;

use contentmodel_core::Term;

use crate::model::ModelGroup;

/// Index of a leaf in the automaton arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LeafId(u32);

impl LeafId {
    /// The synthetic initial position.
    pub const INITIAL: LeafId = LeafId(0);

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

/// Index of an AND group in the automaton's group table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AndGroupId(u32);

impl AndGroupId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

/// Position of a token inside its nearest enclosing AND group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AndMembership {
    pub group: AndGroupId,
    /// Index of the group member that contains the token.
    pub member: u32,
}

/// An AND group as seen by the runtime: where its state bits live and which
/// members must still occur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AndGroup {
    /// Number of AND groups enclosing this one.
    pub(crate) depth: u32,
    /// First AND-state slot of this group; member `i` owns slot `index + i`.
    pub(crate) index: u32,
    /// Membership of this group in its own enclosing AND group.
    pub(crate) parent: Option<AndMembership>,
    /// Inherent optionality of each member.
    pub(crate) member_optional: Vec<bool>,
}

impl AndGroup {
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn parent(&self) -> Option<AndMembership> {
        self.parent
    }

    #[inline]
    pub fn member_count(&self) -> u32 {
        self.member_optional.len() as u32
    }

    #[inline]
    pub fn is_member_optional(&self, member: u32) -> bool {
        self.member_optional[member as usize]
    }

    /// AND-state slot owned by `member`.
    #[inline]
    pub fn slot(&self, member: u32) -> u32 {
        self.index + member
    }
}

/// A directed edge between two leaves.
///
/// Guard fields only apply when the source leaf sits inside an AND group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub(crate) to: LeafId,
    /// AND-state slots at or above this index are reset when the edge fires.
    pub(crate) clear_from: u32,
    /// The edge may fire only when every enclosing AND group at this depth or
    /// deeper has no outstanding non-optional member.
    pub(crate) and_depth: u32,
    /// The edge targets a non-optional AND member, so it cannot be confused
    /// with an edge of lower depth.
    pub(crate) isolated: bool,
    /// AND-state slot that must be clear for the edge to fire.
    pub(crate) require_clear: Option<u32>,
    /// AND-state slot set when the edge fires.
    pub(crate) to_set: Option<u32>,
}

impl Transition {
    #[inline]
    pub fn to(&self) -> LeafId {
        self.to
    }

    #[inline]
    pub fn clear_from(&self) -> u32 {
        self.clear_from
    }

    #[inline]
    pub fn and_depth(&self) -> u32 {
        self.and_depth
    }

    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.isolated
    }

    #[inline]
    pub fn require_clear(&self) -> Option<u32> {
        self.require_clear
    }

    #[inline]
    pub fn to_set(&self) -> Option<u32> {
        self.to_set
    }
}

/// How a leaf reaches character data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PcdataTransition {
    /// No PCDATA edge.
    #[default]
    None,
    /// Exactly one unguarded PCDATA edge.
    Simple(LeafId),
    /// PCDATA edges that need the full guarded scan.
    Complex,
}

/// A matchable position of the automaton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaf {
    pub(crate) id: LeafId,
    /// `None` for the initial position.
    pub(crate) term: Option<Term>,
    /// Ordinal among leaves with the same term (0-based).
    pub(crate) type_index: u32,
    pub(crate) is_final: bool,
    pub(crate) optional: bool,
    pub(crate) or_group_member: bool,
    pub(crate) and_membership: Option<AndMembership>,
    pub(crate) transitions: Vec<Transition>,
    /// Index into `transitions` of the contextually required edge.
    pub(crate) required: Option<usize>,
    pub(crate) pcdata: PcdataTransition,
}

impl Leaf {
    pub(crate) fn new(id: LeafId, term: Option<Term>) -> Self {
        Self {
            id,
            term,
            type_index: 0,
            is_final: false,
            optional: false,
            or_group_member: false,
            and_membership: None,
            transitions: Vec::new(),
            required: None,
            pcdata: PcdataTransition::None,
        }
    }

    #[inline]
    pub fn id(&self) -> LeafId {
        self.id
    }

    #[inline]
    pub fn term(&self) -> Option<Term> {
        self.term
    }

    #[inline]
    pub fn is_initial(&self) -> bool {
        self.term.is_none()
    }

    #[inline]
    pub fn type_index(&self) -> u32 {
        self.type_index
    }

    #[inline]
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    #[inline]
    pub fn inherently_optional(&self) -> bool {
        self.optional
    }

    #[inline]
    pub fn or_group_member(&self) -> bool {
        self.or_group_member
    }

    #[inline]
    pub fn and_membership(&self) -> Option<AndMembership> {
        self.and_membership
    }

    #[inline]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    #[inline]
    pub fn required_index(&self) -> Option<usize> {
        self.required
    }

    /// The contextually required edge, if any.
    #[inline]
    pub fn required_transition(&self) -> Option<&Transition> {
        self.required.map(|i| &self.transitions[i])
    }

    #[inline]
    pub fn pcdata_transition(&self) -> PcdataTransition {
        self.pcdata
    }
}

/// A compile-time finding: from `from`, the same next term leads to both
/// `to1` and `to2` and AND depth ordering cannot tell them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentModelAmbiguity {
    pub from: LeafId,
    pub to1: LeafId,
    pub to2: LeafId,
    pub and_depth: u32,
}

/// A content model compiled into a transition automaton.
#[derive(Clone, Debug)]
pub struct CompiledModelGroup {
    pub(crate) model: ModelGroup,
    pub(crate) leaves: Vec<Leaf>,
    pub(crate) and_groups: Vec<AndGroup>,
    pub(crate) and_state_size: u32,
    pub(crate) contains_pcdata: bool,
}

impl CompiledModelGroup {
    /// The synthetic initial position.
    #[inline]
    pub fn initial(&self) -> &Leaf {
        &self.leaves[LeafId::INITIAL.index()]
    }

    /// Look up a leaf.
    ///
    /// # Panics
    /// Panics if the id does not belong to this automaton.
    #[inline]
    pub fn leaf(&self, id: LeafId) -> &Leaf {
        self.ensure_leaf(id)
    }

    /// All positions, initial first.
    #[inline]
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    /// Look up an AND group.
    ///
    /// # Panics
    /// Panics if the id does not belong to this automaton.
    #[inline]
    pub fn and_group(&self, id: AndGroupId) -> &AndGroup {
        self.ensure_and_group(id)
    }

    #[inline]
    pub fn and_groups(&self) -> &[AndGroup] {
        &self.and_groups
    }

    /// Number of AND-state slots a matcher needs.
    #[inline]
    pub fn and_state_size(&self) -> u32 {
        self.and_state_size
    }

    #[inline]
    pub fn contains_pcdata(&self) -> bool {
        self.contains_pcdata
    }

    /// The model group this automaton was compiled from.
    #[inline]
    pub fn model(&self) -> &ModelGroup {
        &self.model
    }
}
