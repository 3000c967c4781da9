//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic text and error types.

use pretty_assertions::assert_eq;

use crate::errors::errors::{
    render, Diagnostic, DiagnosticKind, Error, ErrorImpl, ErrorText, ErrorTip,
};
use crate::{Location, Span};

fn span(text: &str) -> Span<'_> {
    Span::new(0, 1, text, "test.tn")
}

#[test]
fn test_error_text_rendering() {
    assert_eq!(ErrorText::text("plain").to_string(), "plain");
    assert_eq!(ErrorText::code("val").to_string(), "`val`");
    assert_eq!(ErrorText::newline().to_string(), "\n");
}

#[test]
fn test_render_concatenates_in_order() {
    let message = vec![
        ErrorText::text("expected "),
        ErrorText::code("->"),
        ErrorText::newline(),
        ErrorText::text("found "),
        ErrorText::code("="),
    ];

    assert_eq!(render(&message), "expected `->`\nfound `=`");
    assert_eq!(render(&[]), "");
}

#[test]
fn test_error_text_does_not_escape() {
    assert_eq!(ErrorText::code("`").to_string(), "```");
}

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, span("@"));

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.kind(), DiagnosticKind::LexerError);
    assert_eq!(
        error.error(),
        &[
            ErrorText::text("unrecognised character "),
            ErrorText::code("@"),
        ]
    );
}

#[test]
fn test_error_location() {
    let error = Error::new(ErrorImpl::UnterminatedString, span("\"abc"));

    assert_eq!(error.location().start(), 0);
    assert_eq!(error.location().end(), 1);
    assert_eq!(error.location().file(), "test.tn");
    assert_eq!(error.location().text(), "\"abc");
    assert_eq!(error.get_span().slice(), "\"");
}

#[test]
fn test_newline_character_is_escaped_in_message() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '\n' }, span("\n"));

    assert_eq!(render(error.error()), "unrecognised character `\\n`");
}

#[test]
fn test_unterminated_string_message() {
    let error = Error::new(ErrorImpl::UnterminatedString, span("\"abc"));

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(
        render(error.error()),
        "unterminated string literal\nexpected a closing `\"` before the end of the file"
    );
}

#[test]
fn test_error_impl_display_matches_message() {
    for error_impl in [
        ErrorImpl::UnrecognisedCharacter { character: '#' },
        ErrorImpl::UnrecognisedCharacter { character: '\n' },
        ErrorImpl::UnterminatedString,
    ] {
        let error = Error::new(error_impl.clone(), span("#"));
        assert_eq!(error_impl.to_string(), render(error.error()));
    }

    assert_eq!(
        ErrorImpl::UnrecognisedCharacter { character: '#' }.to_string(),
        "unrecognised character `#`"
    );
}

#[test]
fn test_diagnostic_tip_comes_from_error() {
    let error = Error::new(ErrorImpl::UnterminatedString, span("\""));
    assert_eq!(Diagnostic::tip(&error).to_string(), error.get_tip().to_string());

    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, span("@"));
    assert!(matches!(Diagnostic::tip(&error), ErrorTip::None));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, span("@"));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnterminatedString, span("\""));

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostic_kind_display() {
    assert_eq!(DiagnosticKind::LexerError.to_string(), "LexerError");
    assert_eq!(DiagnosticKind::TyperError.to_string(), "TyperError");
}
