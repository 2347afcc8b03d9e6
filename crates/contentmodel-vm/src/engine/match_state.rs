//! Cursor over a compiled content model.

use contentmodel_compiler::{CompiledModelGroup, Leaf, LeafId, PcdataTransition, Transition};
use contentmodel_core::{ElementTypeId, Term};

use super::and_state::AndState;
use super::trace::{NoopTracer, Tracer};

/// Matching state for one element's content.
///
/// Every query and move is answered from the shared automaton plus this
/// state. A rejected event leaves the state untouched.
#[derive(Clone, Debug)]
pub struct MatchState<'g> {
    group: &'g CompiledModelGroup,
    pos: LeafId,
    and_state: AndState,
    /// Edges out of an AND member below this depth would abandon a group
    /// with an outstanding non-optional member.
    min_and_depth: u32,
}

impl<'g> MatchState<'g> {
    /// Start at the initial position with a fresh AND state.
    pub fn new(group: &'g CompiledModelGroup) -> Self {
        Self {
            group,
            pos: LeafId::INITIAL,
            and_state: AndState::new(group.and_state_size()),
            min_and_depth: 0,
        }
    }

    #[inline]
    pub fn group(&self) -> &'g CompiledModelGroup {
        self.group
    }

    #[inline]
    pub fn current_position(&self) -> &'g Leaf {
        self.group.leaf(self.pos)
    }

    #[inline]
    pub fn min_and_depth(&self) -> u32 {
        self.min_and_depth
    }

    #[inline]
    pub fn and_state(&self) -> &AndState {
        &self.and_state
    }

    /// Accept a start tag for `element` if the model allows it here.
    pub fn try_transition(&mut self, element: ElementTypeId) -> bool {
        self.try_transition_with(element, &mut NoopTracer)
    }

    pub fn try_transition_with<T: Tracer>(&mut self, element: ElementTypeId, tracer: &mut T) -> bool {
        self.try_term(Term::Element(element), tracer)
    }

    /// Accept character data if the model allows it here.
    pub fn try_transition_pcdata(&mut self) -> bool {
        self.try_transition_pcdata_with(&mut NoopTracer)
    }

    pub fn try_transition_pcdata_with<T: Tracer>(&mut self, tracer: &mut T) -> bool {
        let from = self.current_position();
        match from.pcdata_transition() {
            PcdataTransition::None => {
                tracer.trace_reject(from, Term::Pcdata);
                false
            }
            PcdataTransition::Simple(to) => {
                self.move_to(from, to, tracer);
                true
            }
            PcdataTransition::Complex => self.try_term(Term::Pcdata, tracer),
        }
    }

    /// Terms that would currently be accepted, in edge order.
    pub fn possible_transitions(&self) -> Vec<Term> {
        let from = self.current_position();
        from.transitions()
            .iter()
            .filter(|t| self.guard_holds(from, t))
            .filter_map(|t| self.group.leaf(t.to()).term())
            .collect()
    }

    /// The leaf a start tag would be implied for: the destination of the
    /// required edge, if that edge may currently fire.
    pub fn implied_start_tag(&self) -> Option<&'g Leaf> {
        let from = self.current_position();
        let t = from.required_transition()?;
        if !self.guard_holds(from, t) {
            return None;
        }
        Some(self.group.leaf(t.to()))
    }

    /// Commit the edge `implied_start_tag` proposes. Returns `false` and
    /// leaves the state untouched when there is none.
    pub fn do_required_transition(&mut self) -> bool {
        self.do_required_transition_with(&mut NoopTracer)
    }

    pub fn do_required_transition_with<T: Tracer>(&mut self, tracer: &mut T) -> bool {
        let from = self.current_position();
        let Some(t) = from.required_transition() else {
            return false;
        };
        if !self.guard_holds(from, t) {
            return false;
        }

        self.apply_guard_effects(from, t);
        let to = self.group.leaf(t.to());
        self.pos = to.id();
        self.min_and_depth = self.compute_min_and_depth(to);
        tracer.trace_implied(from, to);
        tracer.trace_and_state(&self.and_state, self.min_and_depth);
        true
    }

    /// The leaf `element` would move to, when excluding `element` would
    /// make the content invalid: that leaf is neither inherently optional
    /// nor a choice among alternatives.
    pub fn invalid_exclusion(&self, element: ElementTypeId) -> Option<&'g Leaf> {
        let t = self.find_transition(Term::Element(element), &mut NoopTracer)?;
        let to = self.group.leaf(t.to());
        if to.inherently_optional() || to.or_group_member() {
            return None;
        }
        Some(to)
    }

    /// The content may end here.
    pub fn is_finished(&self) -> bool {
        self.current_position().is_final() && self.min_and_depth == 0
    }

    fn try_term<T: Tracer>(&mut self, term: Term, tracer: &mut T) -> bool {
        let from = self.current_position();
        let Some(t) = self.find_transition(term, tracer) else {
            tracer.trace_reject(from, term);
            return false;
        };

        self.apply_guard_effects(from, t);
        self.move_to(from, t.to(), tracer);
        true
    }

    fn find_transition<T: Tracer>(&self, term: Term, tracer: &mut T) -> Option<&'g Transition> {
        let from = self.current_position();
        for t in from.transitions() {
            if self.group.leaf(t.to()).term() != Some(term) {
                continue;
            }
            if self.guard_holds(from, t) {
                return Some(t);
            }
            tracer.trace_guard_failure(from, t);
        }
        None
    }

    /// Guards only constrain edges leaving an AND member.
    fn guard_holds(&self, from: &Leaf, t: &Transition) -> bool {
        if from.and_membership().is_none() {
            return true;
        }
        let slot_clear = t.require_clear().is_none_or(|slot| self.and_state.is_clear(slot));
        slot_clear && t.and_depth() >= self.min_and_depth
    }

    fn apply_guard_effects(&mut self, from: &Leaf, t: &Transition) {
        if from.and_membership().is_none() {
            return;
        }
        if let Some(slot) = t.to_set() {
            self.and_state.set(slot);
        }
        self.and_state.clear_from(t.clear_from());
    }

    fn move_to<T: Tracer>(&mut self, from: &Leaf, to: LeafId, tracer: &mut T) {
        let leaf = self.group.leaf(to);
        self.pos = to;
        self.min_and_depth = self.compute_min_and_depth(leaf);
        tracer.trace_transition(from, leaf);
        tracer.trace_and_state(&self.and_state, self.min_and_depth);
    }

    /// One past the depth of the innermost enclosing AND group that still
    /// waits for a non-optional member other than the one holding `leaf`.
    fn compute_min_and_depth(&self, leaf: &Leaf) -> u32 {
        let Some(mut membership) = leaf.and_membership() else {
            return 0;
        };
        loop {
            let group = self.group.and_group(membership.group);
            let outstanding = (0..group.member_count()).any(|m| {
                m != membership.member
                    && !group.is_member_optional(m)
                    && self.and_state.is_clear(group.slot(m))
            });
            if outstanding {
                return group.depth() + 1;
            }
            match group.parent() {
                Some(parent) => membership = parent,
                None => return 0,
            }
        }
    }
}

impl PartialEq for MatchState<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.group, other.group)
            && self.pos == other.pos
            && self.and_state == other.and_state
            && self.min_and_depth == other.min_and_depth
    }
}

impl Eq for MatchState<'_> {}
