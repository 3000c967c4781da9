use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fun", TokenKind::Fun);
        map.insert("val", TokenKind::Val);
        map.insert("var", TokenKind::Var);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("loop", TokenKind::Loop);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("when", TokenKind::When);
        map
    };
}

/// Token kinds recognised by the lexer.
///
/// The discriminant is what [`Token::describe`] prints as `kind: K`, so the
/// order of the variants is part of the output format.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum TokenKind {
    EOF,
    Error,

    Identifier,
    Decimal,
    Int,
    String,

    // Reserved
    Fun,
    Val,
    Var,
    For,
    While,
    Loop,
    If,
    Else,
    When,

    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    Equal,        // ==
    NotEqual,     // !=
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,          // &&
    Or,           // ||
    Not,          // !
    Assign,       // =

    LeftParen,
    RightParen,
    LeftBrace,    // [
    RightBrace,   // ]
    LeftBracket,  // {
    RightBracket, // }

    Comma,
    Dot,
    Colon,
    Semi,
    Arrow,

    // Trivia, never produced by the scanner yet
    Comment,
    Newline,
}

impl TokenKind {
    /// Name used when printing tokens for debugging.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Error => "Error",

            TokenKind::Identifier => "Identifier",
            TokenKind::Decimal => "Decimal",
            TokenKind::Int => "Int",
            TokenKind::String => "String",

            TokenKind::Fun => "fun",
            TokenKind::Val => "val",
            TokenKind::Var => "var",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::Loop => "loop",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::When => "when",

            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Not => "!",
            TokenKind::Assign => "=",

            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "[",
            TokenKind::RightBrace => "]",
            TokenKind::LeftBracket => "{",
            TokenKind::RightBracket => "}",

            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Semi => ";",
            TokenKind::Arrow => "->",

            TokenKind::Comment => "//",
            TokenKind::Newline => "\\n",
        }
    }

    pub fn is_keyword(self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| *kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A classified lexeme.
///
/// `text` is the lexeme itself (without the quotes for string literals) and
/// `full_text` is meant to also carry the trivia in front of it. Trivia is
/// not captured yet, so `full_text` only differs from `text` for strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub full_text: &'src str,
    pub span: Span<'src>,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.text)
    }
}

impl<'src> Token<'src> {
    /// Creates a token with an empty span; the scanner attaches the real one
    /// with [`Token::at`].
    pub fn new(kind: TokenKind, text: &'src str, full_text: &'src str) -> Self {
        Token {
            kind,
            text,
            full_text,
            span: Span::default(),
        }
    }

    pub fn at(self, span: Span<'src>) -> Self {
        Token { span, ..self }
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn describe(&self) -> String {
        format!(
            "{} (kind: {}, text: '{}')",
            self.kind.name(),
            self.kind as u8,
            self.text
        )
    }
}
