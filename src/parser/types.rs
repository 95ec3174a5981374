use crate::{
    ast::types::{BaseType, Type},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses a type: one of the elementary type keywords followed by any
/// number of `array` suffixes (`int array array` is an array of int
/// arrays). Void has no keyword and cannot be written here.
pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let base = match parser.current_token_kind() {
        TokenKind::Int => BaseType::Integer,
        TokenKind::Bool => BaseType::Boolean,
        TokenKind::Char => BaseType::Char,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected a type"),
                },
                parser.get_position(),
            ))
        }
    };
    parser.advance();

    let mut ty = Type::Elementary(base);
    while parser.current_token_kind() == TokenKind::Array {
        parser.advance();
        ty = Type::array(ty);
    }

    Ok(ty)
}
