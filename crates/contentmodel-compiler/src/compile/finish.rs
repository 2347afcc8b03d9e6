//! Per-leaf finishing pass.
//!
//! Drops duplicate edges, classifies the PCDATA edge, detects ambiguity and
//! decides whether character data is reachable everywhere it appears in the
//! model. Leaves are visited in arena order (initial first) and each leaf's
//! transition list is compacted in place.

use contentmodel_core::Term;

use crate::automaton::{
    AndGroup, AndMembership, ContentModelAmbiguity, Leaf, LeafId, PcdataTransition, Transition,
};

/// What the finishing pass found across the whole automaton.
#[derive(Debug, Default)]
pub(super) struct Findings {
    pub(super) ambiguities: Vec<ContentModelAmbiguity>,
    pub(super) pcdata_unreachable: bool,
}

/// Destination facts the per-leaf pass needs while the source is borrowed
/// mutably.
#[derive(Clone, Copy)]
struct Destination {
    term: Term,
    in_and: bool,
}

/// Scratch tables reused across leaves.
struct Scratch {
    /// Smallest AND depth of a kept edge per destination leaf.
    min_and_depth: Vec<u32>,
    /// Compacted index of the kept edge per destination leaf.
    kept_at: Vec<usize>,
    /// Compacted index of the edge currently owning each term bucket.
    term_edge: Vec<Option<usize>>,
}

const UNSEEN: u32 = u32::MAX;

impl Scratch {
    fn new(leaf_count: usize, bucket_count: usize) -> Self {
        Self {
            min_and_depth: vec![UNSEEN; leaf_count],
            kept_at: vec![0; leaf_count],
            term_edge: vec![None; bucket_count],
        }
    }

    fn reset(&mut self) {
        self.min_and_depth.fill(UNSEEN);
        self.term_edge.fill(None);
    }
}

pub(super) fn finish(
    leaves: &mut [Leaf],
    and_groups: &[AndGroup],
    element_type_count: usize,
) -> Findings {
    // Index 0 is the initial position and is never a destination.
    let destinations: Vec<Option<Destination>> = leaves
        .iter()
        .map(|leaf| {
            leaf.term.map(|term| Destination {
                term,
                in_and: leaf.and_membership.is_some(),
            })
        })
        .collect();
    let mut scratch = Scratch::new(leaves.len(), Term::bucket_count(element_type_count));
    let mut findings = Findings::default();
    let mut pass = LeafPass {
        destinations: &destinations,
        and_groups,
        scratch: &mut scratch,
        findings: &mut findings,
    };

    for leaf in leaves.iter_mut() {
        pass.scratch.reset();
        match leaf.and_membership {
            None => pass.finish_plain(leaf),
            Some(membership) => pass.finish_in_and(leaf, membership),
        }
    }

    findings
}

struct LeafPass<'a> {
    destinations: &'a [Option<Destination>],
    and_groups: &'a [AndGroup],
    scratch: &'a mut Scratch,
    findings: &'a mut Findings,
}

impl LeafPass<'_> {
    fn destination(&self, id: LeafId) -> Destination {
        self.destinations[id.index()]
            .unwrap_or_else(|| panic!("transition targets the initial position"))
    }

    /// Source outside every AND group: the first edge to each destination
    /// wins and a term shared by two destinations is ambiguous.
    fn finish_plain(&mut self, leaf: &mut Leaf) {
        let mut pcdata = PcdataTransition::None;
        let mut required = None;
        let mut kept = 0;

        for i in 0..leaf.transitions.len() {
            let t = leaf.transitions[i];
            let to = t.to.index();

            if self.scratch.min_and_depth[to] != UNSEEN {
                if leaf.required == Some(i) {
                    required = Some(self.scratch.kept_at[to]);
                }
                continue;
            }

            self.scratch.min_and_depth[to] = 0;
            self.scratch.kept_at[to] = kept;
            leaf.transitions[kept] = t;
            if leaf.required == Some(i) {
                required = Some(kept);
            }

            let dest = self.destination(t.to);
            if dest.term.is_pcdata() {
                pcdata = if dest.in_and {
                    PcdataTransition::Complex
                } else {
                    PcdataTransition::Simple(t.to)
                };
            }

            let bucket = dest.term.bucket();
            if let Some(prev) = self.scratch.term_edge[bucket] {
                self.record_ambiguity(leaf.id, &leaf.transitions[prev], &t, 0);
            }
            self.scratch.term_edge[bucket] = Some(kept);
            kept += 1;
        }

        leaf.transitions.truncate(kept);
        leaf.required = required;
        leaf.pcdata = pcdata;

        if pcdata == PcdataTransition::None {
            self.findings.pcdata_unreachable = true;
        }
    }

    /// Source inside an AND group: per destination only the edge of smallest
    /// depth survives, and a term clash is ambiguous unless the earlier edge
    /// is isolated at a greater depth.
    fn finish_in_and(&mut self, leaf: &mut Leaf, membership: AndMembership) {
        let mut pcdata = PcdataTransition::None;
        let mut pcdata_min_covered = 0u32;
        let mut required = None;
        let mut kept = 0;

        for i in 0..leaf.transitions.len() {
            let t = leaf.transitions[i];
            let to = t.to.index();

            if t.and_depth >= self.scratch.min_and_depth[to] {
                if leaf.required == Some(i) {
                    required = Some(self.scratch.kept_at[to]);
                }
                continue;
            }

            let min_depth = t.and_depth;
            self.scratch.min_and_depth[to] = min_depth;
            self.scratch.kept_at[to] = kept;
            leaf.transitions[kept] = t;
            if leaf.required == Some(i) {
                required = Some(kept);
            }

            let dest = self.destination(t.to);
            if dest.term.is_pcdata() {
                if pcdata == PcdataTransition::None {
                    if self.leaves_open_member(membership, min_depth) {
                        self.findings.pcdata_unreachable = true;
                    }
                    if t.isolated {
                        pcdata_min_covered = min_depth;
                    }
                    pcdata = PcdataTransition::Complex;
                } else {
                    if pcdata_min_covered > min_depth + 1 {
                        self.findings.pcdata_unreachable = true;
                    }
                    pcdata_min_covered = if t.isolated { min_depth } else { 0 };
                }
            }

            let bucket = dest.term.bucket();
            match self.scratch.term_edge[bucket] {
                Some(prev) => {
                    let prev_t = leaf.transitions[prev];
                    if prev_t.and_depth == t.and_depth || !prev_t.isolated {
                        self.record_ambiguity(leaf.id, &prev_t, &t, t.and_depth);
                    }
                    if prev_t.isolated {
                        self.scratch.term_edge[bucket] = Some(kept);
                    }
                }
                None => self.scratch.term_edge[bucket] = Some(kept),
            }
            kept += 1;
        }

        if pcdata_min_covered > 0 || pcdata == PcdataTransition::None {
            self.findings.pcdata_unreachable = true;
        }

        leaf.transitions.truncate(kept);
        leaf.required = required;
        leaf.pcdata = pcdata;
    }

    /// Whether a PCDATA edge at `min_depth` can leave the innermost AND
    /// group that still has another non-optional member, stranding the
    /// character data before that member occurred.
    fn leaves_open_member(&self, membership: AndMembership, min_depth: u32) -> bool {
        let mut current = membership;
        loop {
            let group = &self.and_groups[current.group.index()];
            let has_required_sibling = (0..group.member_count())
                .any(|k| k != current.member && !group.is_member_optional(k));
            if has_required_sibling {
                return min_depth <= group.depth;
            }
            match group.parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn record_ambiguity(&mut self, from: LeafId, prev: &Transition, next: &Transition, depth: u32) {
        if prev.to == next.to {
            return;
        }
        self.findings.ambiguities.push(ContentModelAmbiguity {
            from,
            to1: prev.to,
            to2: next.to,
            and_depth: depth,
        });
    }
}
