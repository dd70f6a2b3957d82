//! Fatal conversion errors.

use lmt::source::{Relation, SourceNode, Xml2Js, ZthesXml};
use lmt::{ErrorKind, LmtError, MesaSynaptica, Profile, to_lmt};
use rstest::rstest;

use crate::helpers::fixtures::{term_xml, zthes};
use crate::helpers::nodes::{audio_term, document, group_node, narrower};

fn convert_xml(input: &[u8]) -> Result<lmt::Lmt, LmtError> {
    MesaSynaptica::default().convert(input, &ZthesXml::default())
}

#[test]
fn test_duplicate_tags_between_terms() {
    let input = zthes(&format!(
        "{}{}",
        term_xml("1", "English", &[("Code", "en"), ("Long Description 1", "English"), ("Audio Language Tag", "en")]),
        term_xml("2", "Englisch", &[("Code", "eng"), ("Long Description 1", "English"), ("Audio Language Tag", "en")]),
    ));

    let err = convert_xml(&input).unwrap_err();
    match err {
        LmtError::DuplicateTagMapping { tag, id, existing } => {
            assert_eq!(tag, "en");
            assert_eq!(id, "2");
            assert_eq!(existing, "1");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_missing_long_description_is_named() {
    let input = zthes(&term_xml(
        "5",
        "English",
        &[("Code", "en"), ("Audio Language Tag", "en")],
    ));

    let err = convert_xml(&input).unwrap_err();
    assert!(matches!(
        err,
        LmtError::AmbiguousOrInvalidNode { ref id, missing: Some("LongDescription1") } if id == "5"
    ));
    assert!(err.to_string().contains("LongDescription1"));
}

#[test]
fn test_neither_term_nor_group() {
    let input = zthes(&term_xml(
        "6",
        "Orphan",
        &[("Code", "xx"), ("Long Description 1", "No tags")],
    ));
    let err = convert_xml(&input).unwrap_err();
    assert!(matches!(err, LmtError::AmbiguousOrInvalidNode { missing: None, .. }));
}

#[rstest]
#[case::top_level(vec![
    audio_term("1", "en"),
    SourceNode::new("2", "Bad").with_note("Script", "Latn"),
])]
#[case::relation(vec![
    group_node("900", "gem")
        .with_relation(narrower(audio_term("1", "en").with_note("Script", "Latn"))),
])]
#[case::group_node(vec![group_node("900", "gem").with_note("Script", "Latn")])]
fn test_unknown_label_anywhere(#[case] nodes: Vec<SourceNode>) {
    let err = to_lmt(&document(nodes), &Profile::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownNoteLabel);
    assert!(err.to_string().contains("Script"));
}

#[test]
fn test_unknown_label_halts_before_later_nodes() {
    // The later node would fail with a duplicate tag if it were reached.
    let nodes = vec![
        audio_term("1", "en"),
        SourceNode::new("2", "Bad").with_note("Script", "Latn"),
        audio_term("3", "en"),
    ];
    let err = to_lmt(&document(nodes), &Profile::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownNoteLabel);
}

#[test]
fn test_missing_root_element() {
    let err = convert_xml(b"<Other-ZThes><term/></Other-ZThes>").unwrap_err();
    assert!(matches!(err, LmtError::MissingRootElement { ref root } if root == "Synaptica-ZThes"));

    let err = MesaSynaptica::default()
        .convert(br#"{"Other-ZThes": {}}"#, &Xml2Js::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRootElement);
}

#[rstest]
#[case::no_id("<term><termName>x</termName><termNote label=\"Code\">x</termNote></term>", "termID")]
#[case::no_name("<term><termID>1</termID><termNote label=\"Code\">x</termNote></term>", "termName")]
#[case::no_notes("<term><termID>1</termID><termName>x</termName></term>", "termNote")]
fn test_missing_required_element(#[case] term: &str, #[case] element: &str) {
    let err = convert_xml(&zthes(term)).unwrap_err();
    match err {
        LmtError::MissingRequiredElement { element: found, .. } => assert_eq!(found, element),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_missing_relation_type() {
    let mut relation = Relation::new(audio_term("1", "en"), "NT", "1");
    relation.relation_type = None;
    let nodes = vec![group_node("900", "gem").with_relation(relation)];

    let err = to_lmt(&document(nodes), &Profile::default()).unwrap_err();
    assert!(matches!(
        err,
        LmtError::MissingRequiredElement { element: "relationType", .. }
    ));
}

#[test]
fn test_nested_group_is_rejected() {
    let nodes = vec![group_node("900", "gem").with_relation(narrower(group_node("950", "gmw")))];
    let err = to_lmt(&document(nodes), &Profile::default()).unwrap_err();
    assert!(matches!(
        err,
        LmtError::NestedGroup { ref id, ref parent } if id == "950" && parent == "900"
    ));
}

#[test]
fn test_group_tag_reusing_term_tag() {
    let nodes = vec![audio_term("1", "gem"), group_node("900", "gem")];
    let err = to_lmt(&document(nodes), &Profile::default()).unwrap_err();
    assert!(matches!(
        err,
        LmtError::DuplicateTagMapping { ref id, ref existing, .. } if id == "900" && existing == "1"
    ));
}

#[test]
fn test_two_groups_sharing_a_tag() {
    let nodes = vec![group_node("900", "gem"), group_node("901", "gem")];
    let err = to_lmt(&document(nodes), &Profile::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateTagMapping);
}
