use crate::test_utils::compile;

#[test]
fn dump_sequence() {
    let res = compile("(a, b)");

    insta::assert_snapshot!(res.dump(), @r#"
    and-state = 0

    [leaves]
    L0 <initial>
      -> L1 a (required)
    L1 a
      -> L2 b (required)
    L2 b [final]
    "#);
}

#[test]
fn dump_and_group() {
    let res = compile("(a & b?)");

    insta::assert_snapshot!(res.dump(), @r#"
    and-state = 2

    [and]
    G0 = depth 0, slots 0..2, optional {1}

    [leaves]
    L0 <initial>
      -> L1 a
      -> L2 b
    L1 a [final, G0.0]
      -> L2 b @1 need=1 set=0 reset=2
    L2 b [opt, final, G0.1]
      -> L1 a @1 iso need=0 set=1 reset=2
    "#);
}

#[test]
fn dump_mixed_content() {
    let res = compile("(#PCDATA | em)*");

    insta::assert_snapshot!(res.dump(), @r#"
    and-state = 0

    [leaves]
    L0 <initial> [final]
      -> L1 #PCDATA
      -> L2 em
      pcdata -> L1
    L1 #PCDATA [opt, or, final]
      -> L1 #PCDATA
      -> L2 em
      pcdata -> L1
    L2 em [or, final]
      -> L1 #PCDATA
      -> L2 em
      pcdata -> L1
    "#);
}

#[test]
fn dump_numbers_repeated_terms() {
    let res = compile("(a, a?)");

    insta::assert_snapshot!(res.dump(), @r#"
    and-state = 0

    [leaves]
    L0 <initial>
      -> L1 a (required)
    L1 a [final]
      -> L2 a#2
    L2 a#2 [opt, final]
    "#);
}
