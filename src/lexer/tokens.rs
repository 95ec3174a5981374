use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("array", TokenKind::Array);
        map.insert("assert", TokenKind::Assert);
        map.insert("bool", TokenKind::Bool);
        map.insert("char", TokenKind::Char);
        map.insert("define", TokenKind::Define);
        map.insert("do", TokenKind::Do);
        map.insert("else", TokenKind::Else);
        map.insert("elseif", TokenKind::Elseif);
        map.insert("end", TokenKind::End);
        map.insert("if", TokenKind::If);
        map.insert("int", TokenKind::Int);
        map.insert("mod", TokenKind::Mod);
        map.insert("new", TokenKind::New);
        map.insert("not", TokenKind::Not);
        map.insert("or", TokenKind::Or);
        map.insert("return", TokenKind::Return);
        map.insert("step", TokenKind::Step);
        map.insert("then", TokenKind::Then);
        map.insert("to", TokenKind::To);
        map.insert("while", TokenKind::While);
        map.insert("xor", TokenKind::Xor);
        map.insert("T", TokenKind::True);
        map.insert("F", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Integer,
    CharLit,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,

    ColonEquals, // :=
    Equals,      // =
    NotEquals,   // <>

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,
    StarStar,

    // Reserved
    And,
    Array,
    Assert,
    Bool,
    Char,
    Define,
    Do,
    Else,
    Elseif,
    End,
    If,
    Int,
    Mod,
    New,
    Not,
    Or,
    Return,
    Step,
    Then,
    To,
    While,
    Xor,
    True,
    False,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::String,
            TokenKind::CharLit,
            TokenKind::Identifier,
            TokenKind::Integer,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
