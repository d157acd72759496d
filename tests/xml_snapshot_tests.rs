//! Golden snapshot tests for the XML serializer
//!
//! These tests serialize `.ippc` fixtures and compare the documents against
//! stored snapshots. This ensures output format changes are reviewed and
//! intentional.
//!
//! Run with: `cargo test --test xml_snapshot_tests`
//! Review changes: `cargo insta review`

use ippc::parser::parse_program;
use ippc::{XmlConfig, to_xml, to_xml_with_config};
use std::fs;

/// Serialize IPPcode23 source with default settings
fn serialize(source: &str) -> String {
    let program = parse_program(source).expect("parser failed");
    to_xml(&program).expect("serializer failed")
}

/// Load a fixture from the valid fixtures directory
fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/valid/{}.ippc", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path))
}

#[test]
fn test_hello_xml() {
    let xml = serialize(&load_fixture("hello"));
    insta::assert_snapshot!("hello", xml);
}

#[test]
fn test_frames_and_calls_xml() {
    let xml = serialize(&load_fixture("frames_and_calls"));
    insta::assert_snapshot!("frames_and_calls", xml);
}

#[test]
fn test_header_only_xml() {
    let xml = serialize(&load_fixture("header_only"));
    insta::assert_snapshot!("header_only", xml);
}

#[test]
fn test_escaping_xml() {
    let xml = serialize(".IPPcode23\nWRITE string@<tag>&amp;\"q\"'a'\nPUSHS string@\n");
    insta::assert_snapshot!("escaping", xml);
}

#[test]
fn test_custom_config_xml() {
    let program = parse_program(&load_fixture("crlf")).expect("parser failed");
    let config = XmlConfig::new().with_indent("    ").with_declaration(false);
    let xml = to_xml_with_config(&program, config).expect("serializer failed");
    insta::assert_snapshot!("crlf_custom_config", xml);
}
