//! Parser state.
//!
//! This module contains the Parser struct and the conversion of error
//! tokens into diagnostics.

use std::fmt::Debug;

use tracing::{debug, debug_span};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::scan,
        tokens::{Token, TokenKind},
    },
};

/// The number of tokens the parser may consume before it gives up.
pub const DEFAULT_FUEL: u32 = 256;

/// A step of the parse, recorded for building the syntax tree later.
pub trait Event: Debug {}

/// The main parser structure that maintains parsing state.
pub struct Parser<'src> {
    /// The source text being parsed
    input: &'src str,
    /// Current position in the token stream
    index: usize,
    /// The tokens of the whole input, ending with EOF
    tokens: Vec<Token<'src>>,
    /// Diagnostics collected so far
    errors: Vec<Error<'src>>,
    /// Events produced so far
    events: Vec<Box<dyn Event>>,
    /// Guards against infinite loops: every consumed token burns one unit,
    /// and the parser must stop once it reaches zero.
    fuel: u32,
}

impl<'src> Parser<'src> {
    /// Creates a new Parser by scanning `input`.
    ///
    /// Every error token becomes a lexer diagnostic, as does a string
    /// literal that runs into the end of the input.
    pub fn new(file: &'src str, input: &'src str) -> Self {
        let _span = debug_span!("parser", file).entered();

        let tokens = scan(file, input);
        let errors = collect_lexer_errors(&tokens);

        debug!(
            tokens = tokens.len(),
            errors = errors.len(),
            "parser ready"
        );

        Parser {
            input,
            index: 0,
            tokens,
            errors,
            events: vec![],
            fuel: DEFAULT_FUEL,
        }
    }

    pub fn input(&self) -> &'src str {
        self.input
    }

    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    pub fn errors(&self) -> &[Error<'src>] {
        &self.errors
    }

    pub fn events(&self) -> &[Box<dyn Event>] {
        &self.events
    }

    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    /// Returns the current token without advancing.
    ///
    /// The scanner always ends the stream with EOF, so this never runs off
    /// the end of the tokens.
    pub fn current_token(&self) -> &Token<'src> {
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    /// Returns true if the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.current_token().kind != TokenKind::EOF
    }
}

fn collect_lexer_errors<'src>(tokens: &[Token<'src>]) -> Vec<Error<'src>> {
    tokens
        .iter()
        .filter_map(|token| match token.kind {
            TokenKind::Error => token.text.chars().next().map(|character| {
                Error::new(ErrorImpl::UnrecognisedCharacter { character }, token.span)
            }),
            TokenKind::String if !is_terminated(token.full_text) => {
                Some(Error::new(ErrorImpl::UnterminatedString, token.span))
            }
            _ => None,
        })
        .collect()
}

fn is_terminated(string: &str) -> bool {
    string.len() >= 2 && string.ends_with('"')
}
