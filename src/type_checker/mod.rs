//! Type checking and semantic analysis module.
//!
//! This module performs type checking and scope resolution on the AST.
//! Given a parsed program it:
//!
//! - Builds the function table and rejects duplicate definitions
//! - Resolves variable references against per-block scope tables
//! - Verifies type correctness of expressions and statements against
//!   explicit per-operator compatibility tables
//! - Checks function signatures, argument types and return types
//!
//! Scoping is copy-on-branch: every conditional or loop body is checked
//! against an independent copy of the enclosing scope, so declarations
//! inside a block can never leak to sibling branches or outlive the
//! block. Checking is fail-fast; the first error aborts the program.

pub mod ops;
pub mod type_checker;
