//! Error types and diagnostic text.
//!
//! This module defines the vocabulary errors are reported with:
//!
//! - Diagnostic text fragments (plain text, inline code, line breaks)
//! - The `Diagnostic` capability and the stage taxonomy
//! - The concrete lexer errors the parser reports, with tips
//! - Errors raised while loading source files

pub mod errors;

#[cfg(test)]
mod tests;
