use std::fmt::Display;

use crate::Position;

use super::types::{BaseType, Type};

/// Binary operator kinds, as written in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
    Xor,
}

impl Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "*"),
            BinOp::Div => write!(f, "/"),
            BinOp::Pow => write!(f, "**"),
            BinOp::Mod => write!(f, "mod"),
            BinOp::Eq => write!(f, "="),
            BinOp::Ne => write!(f, "<>"),
            BinOp::Lt => write!(f, "<"),
            BinOp::Gt => write!(f, ">"),
            BinOp::Le => write!(f, "<="),
            BinOp::Ge => write!(f, ">="),
            BinOp::And => write!(f, "and"),
            BinOp::Or => write!(f, "or"),
            BinOp::Xor => write!(f, "xor"),
        }
    }
}

/// Unary operator kinds. `Index` is not parsed as a prefix operator;
/// it only labels the diagnostic for indexing a non-array value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
    Index,
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::Not => write!(f, "not"),
            UnaryOp::Index => write!(f, "[]"),
        }
    }
}

/// A literal constant. The literal's type is fixed by its form alone;
/// string literals are arrays of char.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Integer(i64),
    Char(char),
    Boolean(bool),
    Str(String),
}

impl LiteralValue {
    pub fn literal_type(&self) -> Type {
        match self {
            LiteralValue::Integer(_) => Type::Elementary(BaseType::Integer),
            LiteralValue::Char(_) => Type::Elementary(BaseType::Char),
            LiteralValue::Boolean(_) => Type::Elementary(BaseType::Boolean),
            LiteralValue::Str(_) => Type::array(Type::Elementary(BaseType::Char)),
        }
    }
}

/// A function call, either standing alone as a statement or nested
/// inside an expression. `position` is the call-site position used for
/// unknown-callee and arity diagnostics.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub name: String,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

/// Expression nodes. Each variant carries the source position its
/// diagnostics anchor to.
#[derive(Debug, Clone)]
pub enum Expr {
    Variable {
        name: String,
        position: Position,
    },
    Literal {
        value: LiteralValue,
        position: Position,
    },
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        position: Position,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        position: Position,
    },
    /// `a[i]` — element access on an array-typed expression.
    Index {
        array: Box<Expr>,
        index: Box<Expr>,
        position: Position,
    },
    /// `new T[n]` — construction of an array of `n` elements of `T`.
    NewArray {
        element_type: Type,
        size: Box<Expr>,
        position: Position,
    },
    Call(CallExpr),
}

impl Expr {
    pub fn position(&self) -> &Position {
        match self {
            Expr::Variable { position, .. } => position,
            Expr::Literal { position, .. } => position,
            Expr::Binary { position, .. } => position,
            Expr::Unary { position, .. } => position,
            Expr::Index { position, .. } => position,
            Expr::NewArray { position, .. } => position,
            Expr::Call(call) => &call.position,
        }
    }
}
