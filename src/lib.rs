//! # inix
//!
//! A parser for INI structured data.
//!
//! ## Testing
//!
//! Document shape assertions live in the [testing module](inix::testing).

pub mod inix;

pub use inix::{
    dump, parse, parse_with, Document, DocumentError, ParseError, ParseErrorKind, ParseOptions,
    Section,
};
