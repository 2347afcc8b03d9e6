//! Bottom-up analysis of the token tree.
//!
//! Every token yields a first set, a last set and an optional flag. Leaves
//! are allocated in the arena as they are visited (left to right), and the
//! follow edges of each construct are appended to the source leaves:
//! sequence boundaries, repetition loops and the all-pairs edges of AND
//! groups.

use contentmodel_core::{Connector, Occurrence, Term};

use crate::automaton::{AndGroup, AndGroupId, AndMembership, Leaf, LeafId, Transition};
use crate::model::{ContentToken, LeafToken, ModelGroup};

use super::error::CompileError;
use super::sets::{FirstSet, LastSet};

/// Result of analyzing one token.
#[derive(Debug)]
pub(super) struct Analysis {
    pub(super) first: FirstSet,
    pub(super) last: LastSet,
    /// The token can match the empty sequence.
    pub(super) optional: bool,
}

/// Where a token sits relative to enclosing AND and OR groups.
#[derive(Clone, Copy, Debug, Default)]
struct Context {
    and: Option<AndMembership>,
    in_or: bool,
}

/// Parameters shared by every edge added in one `add_transitions` call.
#[derive(Clone, Copy, Debug)]
struct EdgeParams {
    maybe_required: bool,
    clear_from: u32,
    and_depth: u32,
    isolated: bool,
    require_clear: Option<u32>,
    to_set: Option<u32>,
}

impl EdgeParams {
    /// Unguarded edge inside the AND frame `(index, depth)`.
    fn plain(maybe_required: bool, (index, depth): (u32, u32)) -> Self {
        Self {
            maybe_required,
            clear_from: index,
            and_depth: depth,
            isolated: false,
            require_clear: None,
            to_set: None,
        }
    }
}

pub(super) struct Analyzer {
    pub(super) leaves: Vec<Leaf>,
    pub(super) and_groups: Vec<AndGroup>,
    pub(super) and_state_size: u32,
    /// Next per-term ordinal, indexed by term bucket.
    next_type_index: Vec<u32>,
    element_type_count: usize,
}

impl Analyzer {
    pub(super) fn new(element_type_count: usize) -> Self {
        Self {
            leaves: vec![Leaf::new(LeafId::INITIAL, None)],
            and_groups: Vec::new(),
            and_state_size: 0,
            next_type_index: vec![0; Term::bucket_count(element_type_count)],
            element_type_count,
        }
    }

    pub(super) fn analyze_root(&mut self, model: &ModelGroup) -> Result<Analysis, CompileError> {
        self.analyze_group(model, Context::default())
    }

    /// Mark the root's exit leaves final and connect the initial position to
    /// its entry leaves.
    pub(super) fn connect_root(&mut self, root: &Analysis) {
        for &id in root.last.leaves() {
            self.leaves[id.index()].is_final = true;
        }

        let initial = LastSet::single(LeafId::INITIAL);
        self.add_transitions(&initial, &root.first, EdgeParams::plain(true, (0, 0)));

        if root.optional {
            self.leaves[LeafId::INITIAL.index()].is_final = true;
        }
    }

    fn analyze(&mut self, token: &ContentToken, ctx: Context) -> Result<Analysis, CompileError> {
        match token {
            ContentToken::Leaf(leaf) => self.analyze_leaf(leaf, ctx),
            ContentToken::Group(group) => self.analyze_group(group, ctx),
        }
    }

    fn analyze_leaf(&mut self, token: &LeafToken, ctx: Context) -> Result<Analysis, CompileError> {
        if let Term::Element(id) = token.term
            && id.index() >= self.element_type_count
        {
            return Err(CompileError::ElementTypeOutOfRange {
                id: id.as_u32(),
                count: self.element_type_count,
            });
        }

        let id = LeafId::from_index(self.leaves.len());
        let bucket = token.term.bucket();
        let type_index = self.next_type_index[bucket];
        self.next_type_index[bucket] += 1;

        let mut leaf = Leaf::new(id, Some(token.term));
        leaf.type_index = type_index;
        leaf.optional = token.occurrence.is_optional();
        leaf.or_group_member = ctx.in_or;
        leaf.and_membership = ctx.and;
        self.leaves.push(leaf);

        let mut analysis = Analysis {
            first: FirstSet::single(id),
            last: LastSet::single(id),
            optional: false,
        };
        self.apply_occurrence(token.occurrence, &mut analysis, ctx);
        Ok(analysis)
    }

    fn analyze_group(&mut self, group: &ModelGroup, ctx: Context) -> Result<Analysis, CompileError> {
        if group.members.is_empty() {
            return Err(CompileError::EmptyGroup);
        }

        let mut analysis = match group.connector {
            Connector::Seq => self.analyze_seq(&group.members, ctx)?,
            Connector::Or => self.analyze_or(&group.members, ctx)?,
            Connector::And => self.analyze_and(&group.members, ctx)?,
        };
        self.apply_occurrence(group.occurrence, &mut analysis, ctx);
        Ok(analysis)
    }

    fn apply_occurrence(&mut self, occurrence: Occurrence, analysis: &mut Analysis, ctx: Context) {
        if occurrence.is_optional() {
            analysis.optional = true;
        }
        if analysis.optional {
            analysis.first.set_not_required();
        }
        if occurrence.is_repeatable() {
            let frame = self.and_frame(ctx.and);
            self.add_transitions(&analysis.last, &analysis.first, EdgeParams::plain(false, frame));
        }
    }

    fn analyze_seq(&mut self, members: &[ContentToken], ctx: Context) -> Result<Analysis, CompileError> {
        let frame = self.and_frame(ctx.and);
        let mut acc = self.analyze(&members[0], ctx)?;

        for member in &members[1..] {
            let next = self.analyze(member, ctx)?;
            self.add_transitions(&acc.last, &next.first, EdgeParams::plain(true, frame));

            if acc.optional {
                acc.first.append(&next.first);
            }
            if next.optional {
                acc.last.append(&next.last);
            } else {
                acc.last = next.last;
            }
            acc.optional &= next.optional;
        }

        Ok(acc)
    }

    fn analyze_or(&mut self, members: &[ContentToken], ctx: Context) -> Result<Analysis, CompileError> {
        // A single-member group offers no choice.
        let choice = members.len() > 1;
        let inner = Context {
            in_or: ctx.in_or || choice,
            ..ctx
        };

        let mut acc = self.analyze(&members[0], inner)?;
        if choice {
            acc.first.set_not_required();
        }

        for member in &members[1..] {
            let next = self.analyze(member, inner)?;
            acc.first.append(&next.first);
            acc.first.set_not_required();
            acc.last.append(&next.last);
            acc.optional |= next.optional;
        }

        Ok(acc)
    }

    fn analyze_and(&mut self, members: &[ContentToken], ctx: Context) -> Result<Analysis, CompileError> {
        let (index, depth) = self.and_frame(ctx.and);
        let count = members.len() as u32;
        let group = AndGroupId::from_index(self.and_groups.len());

        self.and_groups.push(AndGroup {
            depth,
            index,
            parent: ctx.and,
            member_optional: vec![false; members.len()],
        });
        self.and_state_size = self.and_state_size.max(index + count);

        let mut analyses = Vec::with_capacity(members.len());
        for (member_index, member) in members.iter().enumerate() {
            let member_ctx = Context {
                and: Some(AndMembership {
                    group,
                    member: member_index as u32,
                }),
                in_or: ctx.in_or,
            };
            let analysis = self.analyze(member, member_ctx)?;
            self.and_groups[group.index()].member_optional[member_index] = analysis.optional;
            analyses.push(analysis);
        }

        let mut first = analyses[0].first.clone();
        let mut last = analyses[0].last.clone();
        let mut optional = analyses[0].optional;
        if analyses.len() > 1 {
            first.set_not_required();
        }
        for analysis in &analyses[1..] {
            first.append(&analysis.first);
            first.set_not_required();
            last.append(&analysis.last);
            optional &= analysis.optional;
        }

        // Leaving member i for member j marks i as done and requires j to be
        // still open.
        for (i, from) in analyses.iter().enumerate() {
            for (j, to) in analyses.iter().enumerate() {
                if i == j {
                    continue;
                }
                let params = EdgeParams {
                    maybe_required: false,
                    clear_from: index + count,
                    and_depth: depth + 1,
                    isolated: !to.optional,
                    require_clear: Some(index + j as u32),
                    to_set: Some(index + i as u32),
                };
                self.add_transitions(&from.last, &to.first, params);
            }
        }

        Ok(Analysis {
            first,
            last,
            optional,
        })
    }

    /// `(state index, depth)` of the innermost AND frame at `ancestor`.
    ///
    /// Inside member `m` of group `g` the frame starts right after `g`'s own
    /// slots, one level deeper than `g`.
    fn and_frame(&self, ancestor: Option<AndMembership>) -> (u32, u32) {
        match ancestor {
            Some(membership) => {
                let group = &self.and_groups[membership.group.index()];
                (group.index + group.member_count(), group.depth + 1)
            }
            None => (0, 0),
        }
    }

    fn add_transitions(&mut self, from: &LastSet, to: &FirstSet, params: EdgeParams) {
        for &source in from.leaves() {
            let leaf = &mut self.leaves[source.index()];

            if params.maybe_required
                && let Some(required) = to.required()
            {
                debug_assert!(
                    leaf.required.is_none(),
                    "leaf {} already has a required transition",
                    source.as_u32()
                );
                leaf.required = Some(required + leaf.transitions.len());
            }

            leaf.transitions.extend(to.leaves().iter().map(|&dest| Transition {
                to: dest,
                clear_from: params.clear_from,
                and_depth: params.and_depth,
                isolated: params.isolated,
                require_clear: params.require_clear,
                to_set: params.to_set,
            }));
        }
    }
}
