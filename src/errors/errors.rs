use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

use crate::{Location, Span};

/// The stage a diagnostic comes from.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DiagnosticKind {
    LexerError,
    ParserError,
    ResolutionError,
    TyperError,
    UnknownError,
    CompilerError,
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One fragment of a diagnostic message.
///
/// Messages are built as a sequence of fragments instead of a single string,
/// so renderers can tell prose apart from quoted source code.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorText {
    Text(String),
    Code(String),
    Newline,
}

impl ErrorText {
    pub fn text(text: impl Into<String>) -> Self {
        ErrorText::Text(text.into())
    }

    pub fn code(code: impl Into<String>) -> Self {
        ErrorText::Code(code.into())
    }

    pub fn newline() -> Self {
        ErrorText::Newline
    }
}

impl Display for ErrorText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorText::Text(text) => write!(f, "{}", text),
            ErrorText::Code(code) => write!(f, "`{}`", code),
            ErrorText::Newline => writeln!(f),
        }
    }
}

/// Concatenates the fragments of a message in order.
pub fn render(fragments: &[ErrorText]) -> String {
    fragments.iter().map(ToString::to_string).collect()
}

/// A message reported against a location in the source.
pub trait Diagnostic {
    fn kind(&self) -> DiagnosticKind;
    fn error(&self) -> &[ErrorText];
    fn location(&self) -> &dyn Location;

    /// A suggestion shown under the rendered report, if any.
    fn tip(&self) -> ErrorTip {
        ErrorTip::None
    }
}

#[derive(Debug, Clone)]
pub struct Error<'src> {
    internal_error: ErrorImpl,
    message: Vec<ErrorText>,
    span: Span<'src>,
}

impl<'src> Error<'src> {
    pub fn new(error_impl: ErrorImpl, span: Span<'src>) -> Self {
        Error {
            message: error_impl.message(),
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> &Span<'src> {
        &self.span
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "Add a closing `\"` to the end of the string literal",
            )),
        }
    }
}

impl Diagnostic for Error<'_> {
    fn kind(&self) -> DiagnosticKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } | ErrorImpl::UnterminatedString => {
                DiagnosticKind::LexerError
            }
        }
    }

    fn error(&self) -> &[ErrorText] {
        &self.message
    }

    fn location(&self) -> &dyn Location {
        &self.span
    }

    fn tip(&self) -> ErrorTip {
        self.get_tip()
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character `{}`", .character.escape_debug())]
    UnrecognisedCharacter { character: char },
    #[error("unterminated string literal\nexpected a closing `\"` before the end of the file")]
    UnterminatedString,
}

impl ErrorImpl {
    fn message(&self) -> Vec<ErrorText> {
        match self {
            ErrorImpl::UnrecognisedCharacter { character } => vec![
                ErrorText::text("unrecognised character "),
                ErrorText::code(character.escape_debug().to_string()),
            ],
            ErrorImpl::UnterminatedString => vec![
                ErrorText::text("unterminated string literal"),
                ErrorText::newline(),
                ErrorText::text("expected a closing "),
                ErrorText::code("\""),
                ErrorText::text(" before the end of the file"),
            ],
        }
    }
}

/// Failure to load a source file before scanning.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
