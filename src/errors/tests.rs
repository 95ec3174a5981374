//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::ast::expressions::BinOp;
use crate::ast::types::Type;
use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.tern".to_string())),
    );

    assert_eq!(error.name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.tern".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.position().0, 42);
}

#[test]
fn test_repeated_function_error() {
    let error = Error::new(
        ErrorImpl::RepeatedFunction {
            name: "Main".to_string(),
        },
        Position(0, Rc::new("test.tern".to_string())),
    );

    assert_eq!(error.name(), "RepeatedFunction");
    assert_eq!(error.to_string(), "function \"Main\" already declared");
}

#[test]
fn test_undeclared_variable_error() {
    let error = Error::new(
        ErrorImpl::UndeclaredVariable {
            name: "foo".to_string(),
        },
        Position(0, Rc::new("test.tern".to_string())),
    );

    assert_eq!(error.name(), "UndeclaredVariable");
}

#[test]
fn test_mismatched_type_error() {
    let error = Error::new(
        ErrorImpl::MismatchedType {
            expected: Type::INTEGER,
            actual: Type::array(Type::CHAR),
        },
        Position(0, Rc::new("test.tern".to_string())),
    );

    assert_eq!(error.name(), "MismatchedType");
    assert_eq!(
        error.to_string(),
        "types do not match: expected int, found char array"
    );
}

#[test]
fn test_wrong_args_count_error() {
    let error = Error::new(
        ErrorImpl::WrongArgsCount {
            actual: 3,
            expected: 2,
        },
        Position(0, Rc::new("test.tern".to_string())),
    );

    assert_eq!(error.name(), "WrongArgsCount");
    assert_eq!(error.to_string(), "wrong number of arguments: 3, expected 2");
}

#[test]
fn test_wrong_bin_operand_types_error() {
    let error = Error::new(
        ErrorImpl::WrongBinOperandTypes {
            op: BinOp::Add,
            left: Type::INTEGER,
            right: Type::BOOLEAN,
        },
        Position(0, Rc::new("test.tern".to_string())),
    );

    assert_eq!(error.name(), "WrongBinOperandTypes");
    assert_eq!(
        error.to_string(),
        "operator '+' cannot be applied to int and bool"
    );
}
