/// Syntax tree module
/// Contains the capabilities shared by everything that can appear in a tree
///
/// Submodules:
/// - ast: The `Tree` trait and its implementation for tokens, the leaves of
///   a concrete syntax tree
pub mod ast;
