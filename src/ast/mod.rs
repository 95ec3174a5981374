/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Expression nodes and operator kinds
/// - statements: Statement nodes and the program/function structure
/// - types: Type representations used by declarations and the checker
pub mod expressions;
pub mod statements;
pub mod types;
