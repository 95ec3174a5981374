use crate::{
    ast::{
        expressions::Expr,
        statements::{ElseIfBranch, FuncHeader, Function, Param, Stmt},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type};

/// Parses one `define [Type] Name(params) operators end` unit.
pub fn parse_function(parser: &mut Parser) -> Result<Function, Error> {
    let position = parser.expect(TokenKind::Define)?.span.start;

    // A header without a type annotation declares a Void function.
    let return_type = match parser.current_token_kind() {
        TokenKind::Int | TokenKind::Bool | TokenKind::Char => parse_type(parser)?,
        _ => Type::VOID,
    };

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected a function name after 'define'"),
        },
        parser.get_position(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::OpenParen)?;

    let mut params = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseParen {
        let param_type = parse_type(parser)?;
        let param_name = parser.expect(TokenKind::Identifier)?.value;
        params.push(Param {
            param_type,
            name: param_name,
        });

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let body = parse_operators(parser, &[TokenKind::End])?;
    parser.expect(TokenKind::End)?;

    Ok(Function {
        header: FuncHeader {
            return_type,
            name,
            params,
        },
        body,
        position,
    })
}

/// Parses a `;`-terminated statement sequence up to (not including) one
/// of the given terminator tokens.
pub fn parse_operators(parser: &mut Parser, terminators: &[TokenKind]) -> Result<Vec<Stmt>, Error> {
    let mut operators = Vec::new();

    while !terminators.contains(&parser.current_token_kind()) {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        }

        let stmt = parse_stmt(parser)?;
        parser.expect(TokenKind::Semicolon)?;
        operators.push(stmt);
    }

    Ok(operators)
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return handler(parser);
    }

    // Statements starting with an expression: a call statement, an
    // assignment, or a counted loop (`i := 0 to 9 do ... end`).
    let expr = parse_expr(parser, BindingPower::Default)?;

    if parser.current_token_kind() == TokenKind::ColonEquals {
        return parse_assignment_or_for(parser, expr);
    }

    match expr {
        Expr::Call(call) => Ok(Stmt::Call(call)),
        other => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected ':=' or a call statement"),
            },
            other.position().clone(),
        )),
    }
}

fn parse_assignment_or_for(parser: &mut Parser, target: Expr) -> Result<Stmt, Error> {
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.current_token_kind() == TokenKind::To {
        let counter = match target {
            Expr::Variable { name, .. } => name,
            other => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: parser.current_token().value.clone(),
                        message: String::from("loop counter must be a variable"),
                    },
                    other.position().clone(),
                ))
            }
        };

        parser.advance();
        let to = parse_expr(parser, BindingPower::Default)?;

        let step = if parser.current_token_kind() == TokenKind::Step {
            parser.advance();
            Some(parse_expr(parser, BindingPower::Default)?)
        } else {
            None
        };

        parser.expect(TokenKind::Do)?;
        let body = parse_operators(parser, &[TokenKind::End])?;
        parser.expect(TokenKind::End)?;

        return Ok(Stmt::For {
            counter,
            from: value,
            to,
            step,
            body,
        });
    }

    match target {
        Expr::Variable { .. } | Expr::Index { .. } => Ok(Stmt::Assignment { target, value }),
        other => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("invalid assignment target"),
            },
            other.position().clone(),
        )),
    }
}

pub fn parse_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let type_position = parser.get_position();
    let declared_type = parse_type(parser)?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier during variable declaration"),
        },
        parser.get_position(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::ColonEquals)?;
    let init = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Declaration {
        declared_type,
        name,
        init,
        type_position,
    })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Then)?;

    let branch_ends = [TokenKind::Elseif, TokenKind::Else, TokenKind::End];
    let then_branch = parse_operators(parser, &branch_ends)?;

    let mut elseif_branches = Vec::new();
    while parser.current_token_kind() == TokenKind::Elseif {
        parser.advance();
        let elseif_condition = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::Then)?;
        let body = parse_operators(parser, &branch_ends)?;
        elseif_branches.push(ElseIfBranch {
            condition: elseif_condition,
            body,
        });
    }

    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parse_operators(parser, &[TokenKind::End])?
    } else {
        Vec::new()
    };

    parser.expect(TokenKind::End)?;

    Ok(Stmt::If {
        condition,
        then_branch,
        elseif_branches,
        else_branch,
    })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Do)?;
    let body = parse_operators(parser, &[TokenKind::End])?;
    parser.expect(TokenKind::End)?;

    Ok(Stmt::While { condition, body })
}

pub fn parse_do_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let body = parse_operators(parser, &[TokenKind::While])?;
    parser.expect(TokenKind::While)?;
    let condition = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::DoWhile { body, condition })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().span.start.clone();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(Stmt::Return { value, position })
}

pub fn parse_assert_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Assert { condition })
}

pub fn parse_empty_stmt(_parser: &mut Parser) -> Result<Stmt, Error> {
    // The terminating `;` is consumed by parse_operators.
    Ok(Stmt::Empty)
}
