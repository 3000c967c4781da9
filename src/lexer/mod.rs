//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Single and two-character punctuation and operators
//! - Identifiers and keyword disambiguation
//! - Integer and decimal literals
//! - String literals
//! - Per-character error tokens for input it does not recognise

pub mod lexer;
pub mod tokens;
