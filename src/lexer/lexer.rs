use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, debug_span, trace};

use crate::{Location, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = for<'src> fn(&mut Lexer<'src>, &'src str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored at the cursor, so the first one that matches
    // owns the lexeme.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\"[^\"]*\"?").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^\\p{L}[\\p{L}\\p{Nd}_.']*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^\\p{Nd}+(\\.\\p{Nd}*)?").unwrap(), handler: number_handler },
    ];
}

pub struct Lexer<'src> {
    input: &'src str,
    file: &'src str,
    position: usize,
    start: usize,
    tokens: Vec<Token<'src>>,
}

impl<'src> Lexer<'src> {
    pub fn new(file: &'src str, input: &'src str) -> Lexer<'src> {
        Lexer {
            input,
            file,
            position: 0,
            start: 0,
            tokens: vec![],
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.position = (self.position + n).min(self.input.len());
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn remainder(&self) -> &'src str {
        &self.input[self.position..]
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Span from the start of the current token attempt to the cursor.
    fn span(&self) -> Span<'src> {
        Span::new(self.start, self.position, self.input, self.file)
    }

    fn push(&mut self, token: Token<'src>) {
        trace!(token = %token, start = token.span.start(), end = token.span.end(), "token");
        self.tokens.push(token);
    }

    /// Consumes `len` bytes and pushes them as a token of `kind`.
    fn emit(&mut self, kind: TokenKind, len: usize) {
        self.advance_n(len);
        let lexeme = &self.input[self.start..self.position];
        self.push(MK_TOKEN!(kind, lexeme, self.span()));
    }

    /// Emits `matched` when the next character is `next`, otherwise the
    /// one-character `fallback`. Without a fallback the character is dropped.
    fn either(&mut self, next: char, matched: TokenKind, fallback: Option<TokenKind>) {
        if self.peek() == Some(next) {
            self.emit(matched, 2);
        } else if let Some(kind) = fallback {
            self.emit(kind, 1);
        } else {
            self.advance_n(1);
        }
    }

    fn scan_token(&mut self, c: char) {
        match c {
            '%' => self.emit(TokenKind::Percent, 1),
            '.' => self.emit(TokenKind::Dot, 1),
            ',' => self.emit(TokenKind::Comma, 1),
            ';' => self.emit(TokenKind::Comma, 1),
            '{' => self.emit(TokenKind::LeftBracket, 1),
            '}' => self.emit(TokenKind::RightBracket, 1),
            '[' => self.emit(TokenKind::LeftBrace, 1),
            ']' => self.emit(TokenKind::RightBrace, 1),
            '(' => self.emit(TokenKind::LeftParen, 1),
            ')' => self.emit(TokenKind::RightParen, 1),
            '+' => self.emit(TokenKind::Plus, 1),
            '/' => self.emit(TokenKind::Slash, 1),
            '*' => self.emit(TokenKind::Asterisk, 1),

            '-' => self.either('>', TokenKind::Arrow, Some(TokenKind::Minus)),
            '|' => self.either('|', TokenKind::Or, None),
            '&' => self.either('&', TokenKind::And, None),
            '!' => self.either('=', TokenKind::NotEqual, Some(TokenKind::Equal)),
            '>' => self.either('=', TokenKind::GreaterEqual, Some(TokenKind::Greater)),
            '<' => self.either('=', TokenKind::LessEqual, Some(TokenKind::Less)),
            '=' => self.either('=', TokenKind::Equal, Some(TokenKind::Equal)),

            ' ' | '\t' | '\r' => self.advance_n(1),

            _ => {
                let remaining = self.remainder();
                let matched = PATTERNS.iter().find_map(|pattern| {
                    pattern
                        .regex
                        .find(remaining)
                        .map(|found| (pattern.handler, found.as_str()))
                });

                match matched {
                    Some((handler, lexeme)) => handler(self, lexeme),
                    None => self.emit(TokenKind::Error, c.len_utf8()),
                }
            }
        }
    }

    fn run(mut self) -> Vec<Token<'src>> {
        loop {
            self.start = self.position;

            if self.at_eof() {
                self.push(MK_TOKEN!(TokenKind::EOF, "", self.span()));
                break;
            }

            if let Some(c) = self.at() {
                self.scan_token(c);
            }
        }

        self.tokens
    }
}

fn string_handler<'src>(lexer: &mut Lexer<'src>, lexeme: &'src str) {
    let body = &lexeme[1..];
    let text = body.strip_suffix('"').unwrap_or(body);

    lexer.advance_n(lexeme.len());
    lexer.push(MK_TOKEN!(TokenKind::String, text, lexeme, lexer.span()));
}

fn symbol_handler<'src>(lexer: &mut Lexer<'src>, lexeme: &'src str) {
    let kind = RESERVED_LOOKUP
        .get(lexeme)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.emit(kind, lexeme.len());
}

fn number_handler<'src>(lexer: &mut Lexer<'src>, lexeme: &'src str) {
    let kind = if lexeme.contains('.') {
        TokenKind::Decimal
    } else {
        TokenKind::Int
    };

    lexer.emit(kind, lexeme.len());
}

/// Scans `source` to completion.
///
/// Never fails: characters the lexer does not recognise become
/// [`TokenKind::Error`] tokens and scanning carries on after them. The
/// returned sequence always ends with a single [`TokenKind::EOF`] token.
pub fn scan<'src>(file: &'src str, source: &'src str) -> Vec<Token<'src>> {
    let _span = debug_span!("scan", file).entered();

    let tokens = Lexer::new(file, source).run();

    debug!(
        tokens = tokens.len(),
        errors = tokens.iter().filter(|t| t.kind == TokenKind::Error).count(),
        "scanned"
    );
    tokens
}
