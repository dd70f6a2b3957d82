//! Both readers produce the same table for the same export.

use lmt::source::{SourceFormat, Xml2Js, ZthesXml};
use lmt::{Lmt, MesaSynaptica};

use crate::helpers::fixtures::{LANGUAGES_JSON, LANGUAGES_XML};

#[test]
fn test_xml_and_json_readers_agree() {
    let xml = ZthesXml::default().read(LANGUAGES_XML).expect("read xml");
    let json = Xml2Js::default().read(LANGUAGES_JSON).expect("read json");
    assert_eq!(xml, json);
}

#[test]
fn test_xml_and_json_tables_agree() {
    let converter = MesaSynaptica::default();
    let from_xml = converter.convert(LANGUAGES_XML, &ZthesXml::default()).unwrap();
    let from_json = converter.convert(LANGUAGES_JSON, &Xml2Js::default()).unwrap();
    assert_eq!(from_xml, from_json);
}

#[test]
fn test_empty_root_agrees_across_readers() {
    let converter = MesaSynaptica::default();
    let from_xml = converter
        .convert(b"<Synaptica-ZThes/>", &ZthesXml::default())
        .unwrap();
    let from_json = converter
        .convert(br#"{"Synaptica-ZThes": ""}"#, &Xml2Js::default())
        .unwrap();
    assert_eq!(from_xml, Lmt::default());
    assert_eq!(from_json, from_xml);
}

#[test]
fn test_table_json_roundtrip() {
    let lmt = MesaSynaptica::default()
        .convert(LANGUAGES_XML, &ZthesXml::default())
        .unwrap();

    let encoded = lmt.to_json_pretty().unwrap();
    assert!(encoded.contains(r#""GroupTag": "zh""#));
    assert!(encoded.contains(r#""Metadata": {}"#));
    assert_eq!(Lmt::from_json(&encoded).unwrap(), lmt);
}

#[cfg(feature = "yaml")]
#[test]
fn test_table_yaml_output() {
    let lmt = MesaSynaptica::default()
        .convert(LANGUAGES_XML, &ZthesXml::default())
        .unwrap();
    let yaml = lmt.to_yaml().unwrap();
    assert!(yaml.contains("mapping:"));
    assert!(yaml.contains("relationType: NT"));
}

#[test]
fn test_validate_sniffs_inputs() {
    assert!(ZthesXml::default().validate(LANGUAGES_XML).is_ok());
    assert!(Xml2Js::default().validate(LANGUAGES_JSON).is_ok());
    assert!(ZthesXml::default().validate(LANGUAGES_JSON).is_err());
    assert!(Xml2Js::default().validate(LANGUAGES_XML).is_err());
}
