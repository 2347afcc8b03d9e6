//! Tracing infrastructure for debugging content-model matching.
//!
//! The tracer is a zero-cost abstraction: `MatchState`'s plain methods run
//! with `NoopTracer`, whose empty `#[inline(always)]` methods compile away.
//! The `*_with` variants accept any tracer, such as `PrintTracer`, which
//! collects readable lines.

use contentmodel_compiler::{Leaf, Transition};
use contentmodel_core::{ElementTypes, Term};

use super::and_state::AndState;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Transitions and rejections only.
    #[default]
    Default,
    /// Also AND-state snapshots and edges blocked by their guard.
    Verbose,
}

/// Tracer trait for matcher instrumentation.
///
/// Methods receive the automaton data the matcher already has; name
/// resolution happens in the implementation.
pub trait Tracer {
    /// Called after a transition moved the matcher from `from` to `to`.
    fn trace_transition(&mut self, from: &Leaf, to: &Leaf);

    /// Called after the required transition was committed.
    fn trace_implied(&mut self, from: &Leaf, to: &Leaf);

    /// Called when no edge from `from` accepts `term`.
    fn trace_reject(&mut self, from: &Leaf, term: Term);

    /// Called for an edge whose term matched but whose AND guard did not hold.
    fn trace_guard_failure(&mut self, from: &Leaf, transition: &Transition);

    /// Called after every move with the resulting AND state.
    fn trace_and_state(&mut self, state: &AndState, min_and_depth: u32);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_transition(&mut self, _from: &Leaf, _to: &Leaf) {}

    #[inline(always)]
    fn trace_implied(&mut self, _from: &Leaf, _to: &Leaf) {}

    #[inline(always)]
    fn trace_reject(&mut self, _from: &Leaf, _term: Term) {}

    #[inline(always)]
    fn trace_guard_failure(&mut self, _from: &Leaf, _transition: &Transition) {}

    #[inline(always)]
    fn trace_and_state(&mut self, _state: &AndState, _min_and_depth: u32) {}
}

/// Tracer that collects a readable match trace.
pub struct PrintTracer<'t> {
    types: &'t ElementTypes,
    verbosity: Verbosity,
    lines: Vec<String>,
}

impl<'t> PrintTracer<'t> {
    pub fn new(types: &'t ElementTypes, verbosity: Verbosity) -> Self {
        Self {
            types,
            verbosity,
            lines: Vec::new(),
        }
    }

    /// Collected trace lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    fn leaf_name(&self, leaf: &Leaf) -> String {
        match leaf.term() {
            Some(term) => self.types.display(term),
            None => "<initial>".to_string(),
        }
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_transition(&mut self, from: &Leaf, to: &Leaf) {
        let line = format!(
            "L{} -> L{} {}",
            from.id().as_u32(),
            to.id().as_u32(),
            self.leaf_name(to)
        );
        self.lines.push(line);
    }

    fn trace_implied(&mut self, from: &Leaf, to: &Leaf) {
        let line = format!(
            "L{} => L{} {} (implied)",
            from.id().as_u32(),
            to.id().as_u32(),
            self.leaf_name(to)
        );
        self.lines.push(line);
    }

    fn trace_reject(&mut self, from: &Leaf, term: Term) {
        let line = format!("L{} rejects {}", from.id().as_u32(), self.types.display(term));
        self.lines.push(line);
    }

    fn trace_guard_failure(&mut self, _from: &Leaf, transition: &Transition) {
        if !self.verbose() {
            return;
        }
        self.lines.push(format!(
            "  blocked -> L{} @{}",
            transition.to().as_u32(),
            transition.and_depth()
        ));
    }

    fn trace_and_state(&mut self, state: &AndState, min_and_depth: u32) {
        if !self.verbose() || state.is_empty() {
            return;
        }
        self.lines
            .push(format!("  and={state} min={min_and_depth}"));
    }
}
