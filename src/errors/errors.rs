use std::fmt::Display;

use thiserror::Error;

use crate::ast::expressions::{BinOp, UnaryOp};
use crate::ast::types::Type;
use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(kind: ErrorImpl, position: Position) -> Self {
        Error { kind, position }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.kind
    }

    pub fn name(&self) -> &str {
        match &self.kind {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::CharParseError { .. } => "CharParseError",
            ErrorImpl::RepeatedFunction { .. } => "RepeatedFunction",
            ErrorImpl::UndeclaredFunction { .. } => "UndeclaredFunction",
            ErrorImpl::UndeclaredVariable { .. } => "UndeclaredVariable",
            ErrorImpl::MismatchedType { .. } => "MismatchedType",
            ErrorImpl::WrongArgsCount { .. } => "WrongArgsCount",
            ErrorImpl::WrongBinOperandTypes { .. } => "WrongBinOperandTypes",
            ErrorImpl::WrongUnaryOperandTypes { .. } => "WrongUnaryOperandTypes",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("error parsing character literal: {token:?}")]
    CharParseError { token: String },
    #[error("function {name:?} already declared")]
    RepeatedFunction { name: String },
    #[error("function {name:?} not declared")]
    UndeclaredFunction { name: String },
    #[error("variable {name:?} not declared")]
    UndeclaredVariable { name: String },
    #[error("types do not match: expected {expected}, found {actual}")]
    MismatchedType { expected: Type, actual: Type },
    #[error("wrong number of arguments: {actual}, expected {expected}")]
    WrongArgsCount { actual: usize, expected: usize },
    #[error("operator '{op}' cannot be applied to {left} and {right}")]
    WrongBinOperandTypes { op: BinOp, left: Type, right: Type },
    #[error("operator '{op}' cannot be applied to {operand}")]
    WrongUnaryOperandTypes { op: UnaryOp, operand: Type },
}
