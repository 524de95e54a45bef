//! Snapshot tests for the built-in output formats

use inix::inix::formats::FormatRegistry;
use inix::{dump, parse};

const SOURCE: &str = "\
[server]
host = localhost
user = admin

; trailing section
[client]
mode = fast
";

#[test]
fn test_ini_output() {
    let doc = parse(SOURCE).unwrap();
    let text = dump(&doc);

    insta::assert_snapshot!(text.trim_end(), @r"
    [client]
    mode=fast

    [server]
    host=localhost
    user=admin
    ");
}

#[test]
fn test_json_output() {
    let doc = parse(SOURCE).unwrap();
    let json = FormatRegistry::with_defaults()
        .serialize(&doc, "json")
        .unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "client": {
        "mode": "fast"
      },
      "server": {
        "host": "localhost",
        "user": "admin"
      }
    }
    "#);
}

#[test]
fn test_yaml_output() {
    let doc = parse(SOURCE).unwrap();
    let yaml = FormatRegistry::with_defaults()
        .serialize(&doc, "yaml")
        .unwrap();

    insta::assert_snapshot!(yaml, @r"
    client:
      mode: fast
    server:
      host: localhost
      user: admin
    ");
}

#[test]
fn test_dump_contains_header_then_entry() {
    let doc = parse("[a]\nk=v").unwrap();
    let text = dump(&doc);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines, ["[a]", "k=v", ""]);
}
