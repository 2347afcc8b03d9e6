use contentmodel_core::{Connector, ElementTypeId, Occurrence, Term};

use super::{ContentToken, ModelGroup};

fn el(i: u32) -> ContentToken {
    ContentToken::element(ElementTypeId::from_raw(i))
}

#[test]
fn pcdata_is_always_rep() {
    assert_eq!(ContentToken::pcdata().occurrence(), Occurrence::Rep);
}

#[test]
fn occurrence_modifiers() {
    assert_eq!(el(0).opt().occurrence(), Occurrence::Opt);
    assert_eq!(el(0).plus().occurrence(), Occurrence::Plus);
    assert_eq!(el(0).rep().occurrence(), Occurrence::Rep);
    assert_eq!(ModelGroup::seq([el(0)]).rep().occurrence, Occurrence::Rep);
}

#[test]
fn group_token_count_counts_groups_and_leaves() {
    // (a, (b | c)*, d) -> 1 + a + (1 + b + c) + d = 6
    let model = ModelGroup::seq([
        el(0),
        ModelGroup::or([el(1), el(2)]).rep().into(),
        el(3),
    ]);
    assert_eq!(model.group_token_count(), 6);
}

#[test]
fn nesting_level() {
    let flat = ModelGroup::seq([el(0), el(1)]);
    assert_eq!(flat.nesting_level(), 1);

    let nested = ModelGroup::seq([
        el(0),
        ModelGroup::or([ModelGroup::and([el(1), el(2)]).into(), el(3)]).into(),
    ]);
    assert_eq!(nested.nesting_level(), 3);
}

#[test]
fn accessors() {
    let group = ModelGroup::and([el(0), ContentToken::pcdata()]);
    assert_eq!(group.connector(), Connector::And);
    assert_eq!(group.members().len(), 2);
    assert!(group.contains_pcdata());

    let token: ContentToken = group.into();
    assert!(token.as_leaf().is_none());
    assert!(token.as_group().is_some());

    let leaf = el(5);
    assert_eq!(
        leaf.as_leaf().map(|l| l.term),
        Some(Term::Element(ElementTypeId::from_raw(5)))
    );
}

#[test]
fn serializes_to_json() {
    let model = ModelGroup::or([el(0), ContentToken::pcdata()]).rep();
    let json = serde_json::to_string(&model).unwrap();
    let back: ModelGroup = serde_json::from_str(&json).unwrap();
    assert_eq!(back, model);
}
