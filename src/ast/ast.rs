use crate::{lexer::tokens::Token, Location};

/// Tree Trait
///
/// Anything that occupies a range of the source: tokens today, nodes once a
/// grammar builds them.
pub trait Tree {
    /// Returns the location of the tree.
    fn location(&self) -> &dyn Location;
}

impl Tree for Token<'_> {
    fn location(&self) -> &dyn Location {
        &self.span
    }
}
