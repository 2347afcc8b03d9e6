use crate::{Connector, ElementTypeId, Occurrence, Term};

#[test]
fn occurrence_bits() {
    assert!(!Occurrence::None.is_optional());
    assert!(!Occurrence::None.is_repeatable());
    assert!(Occurrence::Opt.is_optional());
    assert!(!Occurrence::Opt.is_repeatable());
    assert!(!Occurrence::Plus.is_optional());
    assert!(Occurrence::Plus.is_repeatable());
    assert!(Occurrence::Rep.is_optional());
    assert!(Occurrence::Rep.is_repeatable());
}

#[test]
fn occurrence_from_bits_matches_queries() {
    for occ in [
        Occurrence::None,
        Occurrence::Opt,
        Occurrence::Plus,
        Occurrence::Rep,
    ] {
        assert_eq!(
            Occurrence::from_bits(occ.is_optional(), occ.is_repeatable()),
            occ
        );
    }
}

#[test]
fn symbols() {
    assert_eq!(Occurrence::Rep.symbol(), "*");
    assert_eq!(Occurrence::None.symbol(), "");
    assert_eq!(Connector::And.symbol(), "&");
    assert_eq!(Connector::Or.symbol(), "|");
    assert_eq!(Connector::Seq.symbol(), ",");
}

#[test]
fn term_buckets() {
    assert_eq!(Term::Pcdata.bucket(), 0);
    assert_eq!(Term::Element(ElementTypeId::from_raw(0)).bucket(), 1);
    assert_eq!(Term::Element(ElementTypeId::from_raw(4)).bucket(), 5);
    assert_eq!(Term::bucket_count(5), 6);
}

#[test]
fn term_element_accessor() {
    let id = ElementTypeId::from_raw(2);
    assert_eq!(Term::from(id).element(), Some(id));
    assert_eq!(Term::Pcdata.element(), None);
    assert!(Term::Pcdata.is_pcdata());
}
