use crate::automaton::{Leaf, LeafId, PcdataTransition};
use crate::test_utils::compile;

fn targets(leaf: &Leaf) -> Vec<u32> {
    leaf.transitions().iter().map(|t| t.to().as_u32()).collect()
}

#[test]
fn duplicate_edges_collapse() {
    let res = compile("(a*)+");
    let a = &res.compilation.group.leaves()[1];

    assert_eq!(targets(a), [1]);
    assert!(res.ambiguities().is_empty());
}

#[test]
fn required_edge_survives_compaction() {
    let res = compile("(a*, b)");
    let group = &res.compilation.group;
    let a = &group.leaves()[1];

    assert_eq!(targets(a), [1, 2]);
    assert_eq!(a.required_index(), Some(1));
    assert_eq!(group.initial().required_transition().map(|t| t.to()), Some(LeafId::from_index(2)));
}

#[test]
fn shallowest_edge_wins_per_destination() {
    let res = compile("(a & b?)*");
    let a = &res.compilation.group.leaves()[1];
    let depths: Vec<(u32, u32)> = a
        .transitions()
        .iter()
        .map(|t| (t.to().as_u32(), t.and_depth()))
        .collect();

    assert_eq!(depths, [(2, 1), (1, 0), (2, 0)]);
}

#[test]
fn choice_of_sequences_is_ambiguous() {
    let res = compile("((a, b) | (a, c))");

    assert_eq!(res.ambiguities(), ["L0 <initial>: L1 a / L3 a @0"]);
    assert!(res.compilation.is_ambiguous());
}

#[test]
fn optional_before_same_term_is_ambiguous() {
    let res = compile("(a?, a)");
    assert_eq!(res.ambiguities(), ["L0 <initial>: L1 a / L2 a @0"]);
}

#[test]
fn repeated_and_group_is_not_ambiguous() {
    let res = compile("(a & b?)*");
    assert!(res.ambiguities().is_empty());
}

#[test]
fn and_group_with_same_member_twice() {
    let res = compile("(a & a)");
    assert_eq!(res.ambiguities(), ["L0 <initial>: L1 a / L2 a @0"]);
}

#[test]
fn isolated_deeper_edge_shadows_exit() {
    let res = compile("((a & b), a)");
    assert!(res.ambiguities().is_empty());
}

#[test]
fn optional_member_clashes_with_exit() {
    let res = compile("((a & b?), b)");
    assert_eq!(res.ambiguities(), ["L1 a: L2 b / L3 b @0"]);
}

#[test]
fn unambiguous_models() {
    for source in ["(a, b)", "(a | b)*", "(a, b)+", "(a?, b, c*)", "(a & b & c)"] {
        let res = compile(source);
        assert!(res.ambiguities().is_empty(), "{source} should be unambiguous");
    }
}

#[test]
fn pcdata_edges_are_classified() {
    let res = compile("(#PCDATA | a)*");
    let group = &res.compilation.group;
    let pcdata = LeafId::from_index(1);

    assert!(
        group
            .leaves()
            .iter()
            .all(|leaf| leaf.pcdata_transition() == PcdataTransition::Simple(pcdata))
    );

    let res = compile("(a & #PCDATA)");
    let group = &res.compilation.group;
    assert_eq!(group.initial().pcdata_transition(), PcdataTransition::Complex);
    assert_eq!(group.leaves()[1].pcdata_transition(), PcdataTransition::Complex);

    let res = compile("(a, b)");
    assert!(
        res.compilation
            .group
            .leaves()
            .iter()
            .all(|leaf| leaf.pcdata_transition() == PcdataTransition::None)
    );
}

#[test]
fn pcdata_reachability() {
    let reachable = |source: &str| !compile(source).compilation.pcdata_unreachable;

    assert!(reachable("(#PCDATA | a)*"));
    assert!(reachable("(#PCDATA)"));
    assert!(reachable("(a & #PCDATA)"));
    assert!(!reachable("(#PCDATA, a)"));
    assert!(!reachable("(#PCDATA | (a & b))*"));

    // Element-only models never report stranded character data.
    assert!(reachable("(a, b)"));
}
