//! Human-readable automaton dump for inspection and snapshot tests.

use std::fmt::Write;

use contentmodel_core::ElementTypes;

use super::{CompiledModelGroup, Leaf, LeafId, PcdataTransition, Transition};

impl CompiledModelGroup {
    /// Render the automaton with element type names resolved through `types`.
    ///
    /// ```text
    /// and-state = 2
    ///
    /// [and]
    /// G0 = depth 0, slots 0..2, optional {1}
    ///
    /// [leaves]
    /// L0 <initial>
    ///   -> L1 a
    ///   -> L2 b
    /// L1 a [final, G0.0]
    ///   -> L2 b @1 need=1 set=0 reset=2
    /// ```
    pub fn dump(&self, types: &ElementTypes) -> String {
        let mut out = String::new();
        self.format(&mut out, types)
            .expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String, types: &ElementTypes) -> std::fmt::Result {
        writeln!(w, "and-state = {}", self.and_state_size)?;
        writeln!(w)?;

        if !self.and_groups.is_empty() {
            writeln!(w, "[and]")?;
            for (i, group) in self.and_groups.iter().enumerate() {
                write!(
                    w,
                    "G{i} = depth {}, slots {}..{}",
                    group.depth,
                    group.index,
                    group.index + group.member_count()
                )?;
                let optional: Vec<String> = (0..group.member_count())
                    .filter(|&m| group.is_member_optional(m))
                    .map(|m| m.to_string())
                    .collect();
                if !optional.is_empty() {
                    write!(w, ", optional {{{}}}", optional.join(", "))?;
                }
                if let Some(parent) = group.parent {
                    write!(w, ", in G{}.{}", parent.group.index(), parent.member)?;
                }
                writeln!(w)?;
            }
            writeln!(w)?;
        }

        writeln!(w, "[leaves]")?;
        for leaf in &self.leaves {
            self.format_leaf(w, leaf, types)?;
        }
        Ok(())
    }

    fn format_leaf(&self, w: &mut String, leaf: &Leaf, types: &ElementTypes) -> std::fmt::Result {
        write!(w, "L{} {}", leaf.id.as_u32(), self.leaf_name(leaf.id, types))?;

        let mut flags = Vec::new();
        if leaf.optional {
            flags.push("opt".to_string());
        }
        if leaf.or_group_member {
            flags.push("or".to_string());
        }
        if leaf.is_final {
            flags.push("final".to_string());
        }
        if let Some(m) = leaf.and_membership {
            flags.push(format!("G{}.{}", m.group.index(), m.member));
        }
        if !flags.is_empty() {
            write!(w, " [{}]", flags.join(", "))?;
        }
        writeln!(w)?;

        let guarded = leaf.and_membership.is_some();
        for (i, t) in leaf.transitions.iter().enumerate() {
            write!(w, "  -> L{} {}", t.to.as_u32(), self.leaf_name(t.to, types))?;
            if guarded {
                format_guard(w, t)?;
            }
            if leaf.required == Some(i) {
                write!(w, " (required)")?;
            }
            writeln!(w)?;
        }

        match leaf.pcdata {
            PcdataTransition::None => {}
            PcdataTransition::Simple(to) => writeln!(w, "  pcdata -> L{}", to.as_u32())?,
            PcdataTransition::Complex => writeln!(w, "  pcdata guarded")?,
        }
        Ok(())
    }

    /// Term name, suffixed with `#n` for the n-th leaf of the same term.
    fn leaf_name(&self, id: LeafId, types: &ElementTypes) -> String {
        let leaf = self.ensure_leaf(id);
        match leaf.term {
            None => "<initial>".to_string(),
            Some(term) if leaf.type_index == 0 => types.display(term),
            Some(term) => format!("{}#{}", types.display(term), leaf.type_index + 1),
        }
    }
}

fn format_guard(w: &mut String, t: &Transition) -> std::fmt::Result {
    write!(w, " @{}", t.and_depth)?;
    if t.isolated {
        write!(w, " iso")?;
    }
    if let Some(slot) = t.require_clear {
        write!(w, " need={slot}")?;
    }
    if let Some(slot) = t.to_set {
        write!(w, " set={slot}")?;
    }
    write!(w, " reset={}", t.clear_from)
}
