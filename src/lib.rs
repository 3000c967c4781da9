#![allow(clippy::module_inception)]

use std::{fmt::Write, fs, path::Path};

use crate::errors::errors::{render, Diagnostic, ErrorTip, SourceError};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A range of a named source buffer.
pub trait Location {
    fn start(&self) -> usize;
    fn end(&self) -> usize;

    /// Gets the whole text of the file the location points into, not just
    /// the part it covers.
    fn text(&self) -> &str;

    /// Gets the file name of the location.
    fn file(&self) -> &str;
}

/// Byte range `start..end` of `text`, which belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span<'src> {
    start: usize,
    end: usize,
    text: &'src str,
    file: &'src str,
}

impl<'src> Span<'src> {
    pub fn new(start: usize, end: usize, text: &'src str, file: &'src str) -> Self {
        debug_assert!(start <= end && end <= text.len());
        Span {
            start,
            end,
            text,
            file,
        }
    }

    /// The part of the text the span covers.
    pub fn slice(&self) -> &'src str {
        &self.text[self.start..self.end]
    }

    /// 1-based line and column (in characters) of the start of the span.
    pub fn line_col(&self) -> (usize, usize) {
        let (line, line_text, line_pos) = get_line_at_position(self.text, self.start);
        (line, line_text[..line_pos].chars().count() + 1)
    }
}

impl Location for Span<'_> {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }

    fn text(&self) -> &str {
        self.text
    }

    fn file(&self) -> &str {
        self.file
    }
}

/// Returns the line number, the line itself (without its line break) and the
/// byte offset of `position` within that line.
pub fn get_line_at_position(content: &str, position: usize) -> (usize, &str, usize) {
    let pos = position.min(content.len());

    let line_start = content[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line_end = content[pos..].find('\n').map_or(content.len(), |i| pos + i);
    let line_number = content[..pos].matches('\n').count() + 1;

    (line_number, &content[line_start..line_end], pos - line_start)
}

pub fn read_source(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn render_diagnostic(diagnostic: &dyn Diagnostic) -> String {
    /*
        Error: LexerError (unrecognised character `@`)
        -> main.tn
           |
        20 | val a = @
           | --------^
           = tip: ...
    */

    let location = diagnostic.location();
    let span = Span::new(
        location.start(),
        location.end(),
        location.text(),
        location.file(),
    );
    let (line, column) = span.line_col();
    let (_, line_text, _) = get_line_at_position(location.text(), location.start());

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Error: {} ({})",
        diagnostic.kind(),
        render(diagnostic.error())
    );
    let _ = writeln!(out, "-> {}", location.file());
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (column - 1).saturating_sub(removed_whitespace) + 1;
    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");

    if let ErrorTip::Suggestion(suggestion) = diagnostic.tip() {
        let _ = write!(out, "\n{:>padding$} tip: {}", "=", suggestion);
    }
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();
    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        parser::parser::Parser,
        Location, Span,
    };

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 27);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("ab\ncd", 5);
        assert_eq!(line_number, 2);
        assert_eq!(line, "cd");
        assert_eq!(line_pos, 2);
    }

    #[test]
    fn test_span_accessors() {
        let text = "val x = 1";
        let span = Span::new(4, 5, text, "main.tn");

        assert_eq!(span.start(), 4);
        assert_eq!(span.end(), 5);
        assert_eq!(span.text(), text);
        assert_eq!(span.file(), "main.tn");
        assert_eq!(span.slice(), "x");
    }

    #[test]
    fn test_span_line_col() {
        let text = "val x = 1\n  é @";
        let at = text.find('@').unwrap();

        assert_eq!(Span::new(at, at + 1, text, "main.tn").line_col(), (2, 5));
        assert_eq!(Span::new(0, 0, text, "main.tn").line_col(), (1, 1));
    }

    #[test]
    fn test_render_diagnostic() {
        let text = "val x = 1\n  val a = @\n";
        let at = text.find('@').unwrap();
        let error = Error::new(
            ErrorImpl::UnrecognisedCharacter { character: '@' },
            Span::new(at, at + 1, text, "main.tn"),
        );

        let expected = [
            "Error: LexerError (unrecognised character `@`)",
            "-> main.tn",
            "  |",
            "2 | val a = @",
            "  | --------^",
        ]
        .join("\n");

        assert_eq!(super::render_diagnostic(&error), expected);
    }

    #[test]
    fn test_render_diagnostic_with_tip() {
        let parser = Parser::new("m.tn", "val s = \"abc");

        let expected = [
            "Error: LexerError (unterminated string literal",
            "expected a closing `\"` before the end of the file)",
            "-> m.tn",
            "  |",
            "1 | val s = \"abc",
            "  | --------^",
            "  = tip: Add a closing `\"` to the end of the string literal",
        ]
        .join("\n");

        assert_eq!(super::render_diagnostic(&parser.errors()[0]), expected);
    }

    #[test]
    fn test_read_source_missing_file() {
        let error = super::read_source("does/not/exist.tn").unwrap_err();
        assert!(error.to_string().starts_with("failed to read does/not/exist.tn"));
    }
}
