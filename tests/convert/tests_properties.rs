//! Whole-document properties of the conversion.

use lmt::source::{SourceNode, ZthesXml};
use lmt::{MesaSynaptica, Profile, to_lmt};
use rstest::rstest;

use crate::helpers::fixtures::{LANGUAGES_TAGS, LANGUAGES_XML, term_xml, zthes};
use crate::helpers::nodes::{audio_term, document, group_node, narrower, visual_term};

fn convert_xml(input: &[u8]) -> lmt::Lmt {
    MesaSynaptica::default()
        .convert(input, &ZthesXml::default())
        .expect("conversion should succeed")
}

#[test]
fn test_languages_fixture() {
    let lmt = convert_xml(LANGUAGES_XML);

    let names: Vec<_> = lmt.terms.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["English", "Japanese", "Mandarin", "Cantonese"]);

    let mapping: Vec<_> = lmt
        .mapping
        .term
        .iter()
        .map(|(tag, id)| (tag.as_str(), id.as_str()))
        .collect();
    assert_eq!(mapping, LANGUAGES_TAGS);
    assert!(lmt.mapping.group.is_empty());

    assert_eq!(lmt.groups.len(), 1);
    let group = &lmt.groups[0];
    assert_eq!(group.name, "Chinese");
    assert_eq!(group.code, "zh");
    assert_eq!(group.group_tag, "zh");
    let member_tags: Vec<_> = group
        .members
        .iter()
        .map(|m| m.audio_language_tag.as_deref())
        .collect();
    assert_eq!(member_tags, [Some("cmn"), Some("yue")]);
    assert_eq!(group.members[1].relation_weight, "2");
}

#[test]
fn test_optional_fields_are_carried() {
    let lmt = convert_xml(LANGUAGES_XML);

    let english = lmt.term_by_tag("en").unwrap();
    assert_eq!(english.audio_language_display_name_1.as_deref(), Some("English"));
    assert_eq!(
        english.visual_language_display_name_1.as_deref(),
        Some("English (Latin script)")
    );

    let japanese = lmt.term_by_tag("ja-Jpan").unwrap();
    assert_eq!(japanese.visual_language_tag_2.as_deref(), Some("ja-Kana"));
    assert_eq!(japanese.notes.as_deref(), Some("Kanji & kana"));

    let cantonese = lmt.term_by_tag("yue").unwrap();
    assert_eq!(cantonese.long_description_2.as_deref(), Some("Yue"));
}

#[test]
fn test_every_mapping_key_is_unique() {
    let lmt = convert_xml(LANGUAGES_XML);
    let mut keys: Vec<_> = lmt.mapping.term.keys().collect();
    let before = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), before);
}

#[test]
fn test_audio_tag_precedence_in_document() {
    let input = zthes(&term_xml(
        "1",
        "English",
        &[
            ("Code", "en"),
            ("Long Description 1", "English"),
            ("Visual Language Tag 1", "en-Latn"),
            ("Audio Language Tag", "en"),
        ],
    ));
    let lmt = convert_xml(&input);
    let keys: Vec<_> = lmt.mapping.term.keys().map(String::as_str).collect();
    assert_eq!(keys, ["en"]);
}

#[test]
fn test_group_only_node_yields_no_terms() {
    let lmt = to_lmt(&document(vec![group_node("900", "gem")]), &Profile::default()).unwrap();
    assert!(lmt.terms.is_empty());
    assert_eq!(lmt.groups.len(), 1);
}

#[test]
fn test_group_with_two_members() {
    let node = group_node("900", "gem")
        .with_relation(narrower(audio_term("1", "en")))
        .with_relation(narrower(audio_term("2", "de")));
    let lmt = to_lmt(&document(vec![node]), &Profile::default()).unwrap();

    assert_eq!(lmt.terms.len(), 2);
    assert_eq!(lmt.lookup("en"), Some("1"));
    assert_eq!(lmt.lookup("de"), Some("2"));
    assert_eq!(lmt.groups.len(), 1);
    assert_eq!(lmt.groups[0].members.len(), 2);
    assert_eq!(lmt.lookup("gem"), Some("900"));
}

/// Independent restatement of the term predicate over raw notes.
fn is_term(node: &SourceNode) -> bool {
    let has = |label: &str| {
        node.notes
            .iter()
            .flatten()
            .any(|n| n.label == label && n.value.is_some())
    };
    has("Code")
        && has("Long Description 1")
        && (has("Audio Language Tag") || has("Visual Language Tag 1"))
}

#[rstest]
#[case::terms_only(vec![audio_term("1", "en"), visual_term("2", "ja-Jpan")])]
#[case::groups_only(vec![
    group_node("900", "gem").with_relation(narrower(audio_term("1", "en"))),
    group_node("901", "roa").with_relation(narrower(visual_term("2", "fr-Latn"))),
])]
#[case::mixed(vec![
    audio_term("1", "en"),
    group_node("900", "gem")
        .with_relation(narrower(audio_term("2", "de")))
        .with_relation(narrower(visual_term("3", "nl-Latn"))),
    visual_term("4", "ja-Jpan"),
    group_node("901", "empty"),
])]
fn test_term_count_matches_predicate(#[case] nodes: Vec<SourceNode>) {
    let expected: usize = nodes
        .iter()
        .map(|node| {
            if is_term(node) {
                1
            } else {
                node.relations
                    .iter()
                    .flatten()
                    .filter(|r| is_term(&r.node))
                    .count()
            }
        })
        .sum();

    let lmt = to_lmt(&document(nodes), &Profile::default()).unwrap();
    assert_eq!(lmt.terms.len(), expected);
}

#[rstest]
#[case("Audio Language Tag", "en", "en")]
#[case("Visual Language Tag 1", "en-Latn", "en-Latn")]
fn test_tag_source(#[case] label: &str, #[case] value: &str, #[case] expected: &str) {
    let input = zthes(&term_xml(
        "1",
        "English",
        &[("Code", "en"), ("Long Description 1", "English"), (label, value)],
    ));
    let lmt = convert_xml(&input);
    assert_eq!(lmt.lookup(expected), Some("1"));
}
