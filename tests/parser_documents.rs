//! Successful parses, verified with the document assertion API

use inix::inix::testing::assert_document;
use inix::{parse, parse_with, Document, ParseOptions};

#[test]
fn test_empty_input_is_empty_document() {
    assert_document(&parse("").unwrap()).is_empty();
}

#[test]
fn test_full_document() {
    let source = "\
; global settings
[server]
  host = localhost
  port=8080

; the client
[client]
retries = 3
url = http://example.com/?a=b
empty =
";
    let doc = parse(source).unwrap();

    assert_document(&doc)
        .section_count(2)
        .section("server", |s| {
            s.key_count(2).key("host", "localhost").key("port", "8080");
        })
        .section("client", |s| {
            s.key_count(3)
                .key("retries", "3")
                .key("url", "http://example.com/?a=b")
                .key("empty", "");
        });
}

#[test]
fn test_permissive_comments() {
    let source = "# generated\n[a]\n; one\n# two\nk=v\n";
    let doc = parse_with(source, &ParseOptions::permissive()).unwrap();

    assert_document(&doc).section("a", |s| {
        s.key_count(1).key("k", "v");
    });
}

#[test]
fn test_custom_comment_prefix_only() {
    let options = ParseOptions::default().with_comment_prefixes(['#']);

    assert!(parse_with("[a]\n# ok", &options).is_ok());
    assert!(parse_with("[a]\n; not a comment", &options).is_err());
}

#[test]
fn test_mutating_a_parsed_document() {
    let mut doc: Document = "[a]\nk=v".parse().unwrap();

    doc.set_key("a", "k", "w").unwrap();
    doc.add_section("b", Default::default()).unwrap();
    doc.set_key("b", "x", "y").unwrap();
    doc.delete_key("a", "k").unwrap();

    assert_document(&doc)
        .section("a", |s| {
            s.key_count(0).no_key("k");
        })
        .section("b", |s| {
            s.key("x", "y");
        });
}
