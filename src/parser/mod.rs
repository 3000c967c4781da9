//! Parser module.
//!
//! The parser walks the token stream by index and records events that a
//! later stage turns into a concrete syntax tree. Only its construction is
//! implemented so far: building a parser scans the input and collects the
//! lexer errors as diagnostics.

pub mod parser;
