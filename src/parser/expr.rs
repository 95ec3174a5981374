use crate::{
    ast::expressions::{BinOp, CallExpr, Expr, LiteralValue, UnaryOp},
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::{parse_char_literal, parse_integer_literal},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, types::parse_type};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(handler) => *handler,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud_fn(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while *parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();
        let led_fn = match parser.get_led_lookup().get(&token_kind) {
            Some(handler) => *handler,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                ))
            }
        };
        let power = *parser.get_bp_lookup().get(&token_kind).unwrap();

        left = led_fn(parser, left, power)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let value = parser.current_token().value.clone();
            match parse_integer_literal(&value) {
                Some(parsed) => Ok(Expr::Literal {
                    value: LiteralValue::Integer(parsed),
                    position: parser.advance().span.start.clone(),
                }),
                None => Err(Error::new(
                    ErrorImpl::NumberParseError { token: value },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::CharLit => {
            let value = parser.current_token().value.clone();
            match parse_char_literal(&value) {
                Some(parsed) => Ok(Expr::Literal {
                    value: LiteralValue::Char(parsed),
                    position: parser.advance().span.start.clone(),
                }),
                None => Err(Error::new(
                    ErrorImpl::CharParseError { token: value },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::String => {
            let value = parser.current_token().value.clone();
            Ok(Expr::Literal {
                value: LiteralValue::Str(value),
                position: parser.advance().span.start.clone(),
            })
        }
        TokenKind::True | TokenKind::False => {
            let value = parser.current_token_kind() == TokenKind::True;
            Ok(Expr::Literal {
                value: LiteralValue::Boolean(value),
                position: parser.advance().span.start.clone(),
            })
        }
        TokenKind::Identifier => Ok(Expr::Variable {
            name: parser.current_token().value.clone(),
            position: parser.advance().span.start.clone(),
        }),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

fn binop_for(kind: TokenKind) -> BinOp {
    match kind {
        TokenKind::Plus => BinOp::Add,
        TokenKind::Dash => BinOp::Sub,
        TokenKind::Star => BinOp::Mul,
        TokenKind::Slash => BinOp::Div,
        TokenKind::StarStar => BinOp::Pow,
        TokenKind::Mod => BinOp::Mod,
        TokenKind::Equals => BinOp::Eq,
        TokenKind::NotEquals => BinOp::Ne,
        TokenKind::Less => BinOp::Lt,
        TokenKind::Greater => BinOp::Gt,
        TokenKind::LessEquals => BinOp::Le,
        TokenKind::GreaterEquals => BinOp::Ge,
        TokenKind::And => BinOp::And,
        TokenKind::Or => BinOp::Or,
        TokenKind::Xor => BinOp::Xor,
        other => unreachable!("token {other} is not registered as a binary operator"),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary {
        position: left.position().clone(),
        op: binop_for(operator_token.kind),
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// `**` associates to the right: the right operand re-enters the Pratt
/// loop one level below Power so a following `**` binds into it.
pub fn parse_power_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let right = parse_expr(parser, BindingPower::Multiplicative)?;

    Ok(Expr::Binary {
        position: left.position().clone(),
        op: BinOp::Pow,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let op = match operator_token.kind {
        TokenKind::Dash => UnaryOp::Neg,
        _ => UnaryOp::Not,
    };
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary {
        position: operator_token.span.start.clone(),
        op,
        operand: Box::new(rhs),
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let (name, position) = match left {
        Expr::Variable { name, position } => (name, position),
        other => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("only a named function can be called"),
                },
                other.position().clone(),
            ))
        }
    };

    parser.advance();

    let mut arguments = vec![];

    while parser.current_token_kind() != TokenKind::CloseParen {
        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            continue;
        } else {
            arguments.push(parse_expr(parser, BindingPower::Default)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        name,
        arguments,
        position,
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let position = left.position().clone();

    parser.advance();
    let index = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::Index {
        array: Box::new(left),
        index: Box::new(index),
        position,
    })
}

pub fn parse_new_array_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.advance().span.start.clone();

    let element_type = parse_type(parser)?;

    parser.expect(TokenKind::OpenBracket)?;
    let size = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::NewArray {
        element_type,
        size: Box::new(size),
        position,
    })
}
