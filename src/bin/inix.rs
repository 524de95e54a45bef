//! Command-line interface for inix
//! This binary validates INI files and converts them into other formats.
//!
//! Usage:
//!   inix check `<path>`                          - Parse a file and report errors
//!   inix convert `<path>` [--format `<format>`]  - Re-serialize a file (ini, json, yaml)
//!   inix get `<path>` `<section>` [`<key>`]      - Print a value or a whole section
//!   inix list-formats                          - List available output formats
//!
//! Parser policy comes from the built-in defaults, an optional `--config` TOML
//! file, and the `--allow-section-spaces` / `--comment-prefixes` flags, in that
//! order of precedence (last wins). Set `RUST_LOG=debug` for parser diagnostics.

use clap::{Arg, ArgAction, ArgMatches, Command};
use config::ConfigError;
use inix::inix::config::{InixConfig, Loader};
use inix::inix::{parse_with, Document, FormatRegistry, ParseOptions};

fn main() {
    env_logger::init();

    let matches = Command::new("inix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for validating and converting INI files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in configuration"),
        )
        .arg(
            Arg::new("allow-section-spaces")
                .long("allow-section-spaces")
                .global(true)
                .help("Accept section names containing spaces")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("comment-prefixes")
                .long("comment-prefixes")
                .global(true)
                .help("Characters that start a comment line (e.g. ';#')"),
        )
        .subcommand(
            Command::new("check").about("Parse a file and report errors").arg(
                Arg::new("path")
                    .help("Path to the INI file")
                    .required(true)
                    .index(1),
            ),
        )
        .subcommand(
            Command::new("convert")
                .about("Parse a file and serialize it in another format")
                .arg(
                    Arg::new("path")
                        .help("Path to the INI file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (default from configuration, normally 'ini')"),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Print a value, or every key of a section")
                .arg(
                    Arg::new("path")
                        .help("Path to the INI file")
                        .required(true)
                        .index(1),
                )
                .arg(Arg::new("section").required(true).index(2))
                .arg(Arg::new("key").index(3)),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    // Global flags propagate down, so the subcommand matches carry them too.
    let Some((name, sub)) = matches.subcommand() else {
        unreachable!()
    };

    match name {
        "check" => handle_check_command(sub),
        "convert" => handle_convert_command(sub),
        "get" => handle_get_command(sub),
        "list-formats" => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .expect("clap enforces required arguments")
}

fn load_config(matches: &ArgMatches) -> InixConfig {
    build_config(matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn build_config(matches: &ArgMatches) -> Result<InixConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("allow-section-spaces") {
        loader = loader.set_override("parser.reject_spaces_in_section_names", false)?;
    }
    if let Some(prefixes) = matches.get_one::<String>("comment-prefixes") {
        loader = loader.set_override("parser.comment_prefixes", prefixes.as_str())?;
    }
    loader.build()
}

fn load_document(config: &InixConfig, path: &str) -> Document {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let options = ParseOptions::from(config.parser.clone());
    log::debug!("parsing {} with {:?}", path, options);

    parse_with(&source, &options).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        std::process::exit(1);
    })
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let path = required(matches, "path");
    let doc = load_document(&config, path);
    let keys: usize = doc.sections().map(|(_, section)| section.len()).sum();
    println!("{}: ok ({} sections, {} keys)", path, doc.len(), keys);
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let doc = load_document(&config, required(matches, "path"));
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or(config.output.format.as_str());
    let registry = FormatRegistry::with_defaults();

    let output = registry.serialize(&doc, format).unwrap_or_else(|e| {
        eprintln!("{}", e);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the get command
fn handle_get_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let doc = load_document(&config, required(matches, "path"));
    let section = required(matches, "section");

    let result = match matches.get_one::<String>("key") {
        Some(key) => doc
            .lookup_key(section, key)
            .map(|value| println!("{}", value)),
        None => doc.lookup_section(section).map(|entries| {
            for (key, value) in entries {
                println!("{}={}", key, value);
            }
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for (name, description) in registry.descriptions() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
