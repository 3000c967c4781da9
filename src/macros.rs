//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance at a given span

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The lexeme
/// * `$full_text` - The lexeme including its delimiters and trivia
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42", "42", span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $span:expr) => {
        $crate::MK_TOKEN!($kind, $text, $text, $span)
    };
    ($kind:expr, $text:expr, $full_text:expr, $span:expr) => {
        $crate::lexer::tokens::Token::new($kind, $text, $full_text).at($span)
    };
}
