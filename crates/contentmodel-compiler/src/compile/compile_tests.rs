use contentmodel_core::ElementTypes;
use indoc::indoc;

use crate::automaton::CompiledModelGroup;
use crate::compile::{CompileError, Compiler, ModelLimits};
use crate::notation::{NotationError, parse_model};
use crate::{Error, model::ModelGroup};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn compiled_group_is_shareable() {
    assert_send_sync::<CompiledModelGroup>();
}

#[test]
fn compile_notation_interns_names() {
    let mut types = ElementTypes::new();
    types.intern("title");

    let compilation = Compiler::default()
        .compile_notation("(title, section+)", &mut types)
        .unwrap();

    assert_eq!(types.len(), 2);
    assert_eq!(compilation.group.leaves().len(), 3);
    assert!(!compilation.is_ambiguous());
    assert!(!compilation.pcdata_unreachable);
}

#[test]
fn compile_notation_reports_parse_errors() {
    let mut types = ElementTypes::new();
    let err = Compiler::default()
        .compile_notation("(a,)", &mut types)
        .unwrap_err();

    assert!(matches!(err, Error::Notation(NotationError::UnexpectedToken { offset: 3, .. })));
}

#[test]
fn compile_notation_reports_limit_errors() {
    let mut types = ElementTypes::new();
    let compiler = Compiler::builder()
        .limits(ModelLimits::new().grplvl(1))
        .build();
    let err = compiler.compile_notation("((a))", &mut types).unwrap_err();

    assert_eq!(
        err,
        Error::Compile(CompileError::GroupLevelExceeded { level: 2, limit: 1 })
    );
    assert_eq!(
        err.to_string(),
        "groups are nested 2 levels deep, exceeding GRPLVL 1"
    );
}

#[test]
fn compiled_group_keeps_its_model() {
    let mut types = ElementTypes::new();
    let model = parse_model("(a, (b | c)*)", &mut types).unwrap();
    let compilation = CompiledModelGroup::compile(model.clone(), types.len()).unwrap();

    assert_eq!(compilation.group.model(), &model);
    assert!(!compilation.group.contains_pcdata());
}

#[test]
fn element_type_count_may_exceed_model() {
    let mut types = ElementTypes::new();
    let model = parse_model("(a)", &mut types).unwrap();
    for name in ["b", "c", "d"] {
        types.intern(name);
    }

    let compilation = CompiledModelGroup::compile(model, types.len()).unwrap();
    assert_eq!(compilation.group.leaves().len(), 2);
}

#[test]
fn compiled_group_clones_independently() {
    let model = ModelGroup::seq([crate::model::ContentToken::pcdata()]);
    let compilation = CompiledModelGroup::compile(model, 0).unwrap();
    let copy = compilation.group.clone();

    assert_eq!(copy.leaves(), compilation.group.leaves());
    assert!(copy.contains_pcdata());
}

#[test]
fn dump_of_nested_and_groups() {
    let mut types = ElementTypes::new();
    let compilation = Compiler::default()
        .compile_notation("((a & b) & c)", &mut types)
        .unwrap();

    let dump = compilation.group.dump(&types);
    let header = dump.split("[leaves]").next().unwrap();
    assert_eq!(
        header.trim_end(),
        indoc! {"
            and-state = 4

            [and]
            G0 = depth 0, slots 0..2
            G1 = depth 1, slots 2..4, in G0.0
        "}
        .trim_end()
    );
}
