//! Operator compatibility tables.
//!
//! Each operator has its own explicit table of accepted operand types;
//! there is no general widening rule. The only cross-type entries are
//! the char/int arithmetic forms (`'a' + 1`, `'z' - 1`) and the mixed
//! comparisons, and each of those is a deliberate per-operator case.

use crate::ast::expressions::{BinOp, UnaryOp};
use crate::ast::types::{
    BaseType::{Boolean, Char, Integer},
    Type,
};

/// Returns the result type of `left op right`, or None if the operand
/// pair has no entry in the operator's table.
pub fn binary_result_type(op: BinOp, left: &Type, right: &Type) -> Option<Type> {
    use Type::{Array, Elementary};

    match op {
        BinOp::Add => match (left, right) {
            (Elementary(Integer), Elementary(Integer)) => Some(Type::INTEGER),
            (Elementary(Integer), Elementary(Char)) => Some(Type::CHAR),
            (Elementary(Char), Elementary(Integer)) => Some(Type::CHAR),
            _ => None,
        },
        BinOp::Sub => match (left, right) {
            (Elementary(Integer), Elementary(Integer)) => Some(Type::INTEGER),
            (Elementary(Char), Elementary(Integer)) => Some(Type::INTEGER),
            _ => None,
        },
        BinOp::Mul | BinOp::Div | BinOp::Pow | BinOp::Mod => match (left, right) {
            (Elementary(Integer), Elementary(Integer)) => Some(Type::INTEGER),
            _ => None,
        },
        BinOp::Eq | BinOp::Ne => match (left, right) {
            (Elementary(Integer | Char), Elementary(Integer | Char)) => Some(Type::BOOLEAN),
            (Elementary(Boolean), Elementary(Boolean)) => Some(Type::BOOLEAN),
            // Arrays compare only against arrays of the same element type.
            (Array(_), Array(_)) if left == right => Some(Type::BOOLEAN),
            _ => None,
        },
        BinOp::Lt | BinOp::Gt | BinOp::Le | BinOp::Ge => match (left, right) {
            (Elementary(Integer | Char), Elementary(Integer | Char)) => Some(Type::BOOLEAN),
            _ => None,
        },
        BinOp::And | BinOp::Or | BinOp::Xor => match (left, right) {
            (Elementary(Boolean), Elementary(Boolean)) => Some(Type::BOOLEAN),
            _ => None,
        },
    }
}

/// Returns the result type of `op operand`, or None if the operand type
/// has no entry in the operator's table. `Index` is typed at its own
/// AST node, not here.
pub fn unary_result_type(op: UnaryOp, operand: &Type) -> Option<Type> {
    use Type::Elementary;

    match op {
        UnaryOp::Neg => match operand {
            Elementary(Integer) => Some(Type::INTEGER),
            Elementary(Char) => Some(Type::CHAR),
            _ => None,
        },
        UnaryOp::Not => match operand {
            Elementary(Boolean) => Some(Type::BOOLEAN),
            _ => None,
        },
        UnaryOp::Index => None,
    }
}
