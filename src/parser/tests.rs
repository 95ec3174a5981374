//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs
//! including:
//! - Function definitions
//! - Variable declarations and assignments
//! - Control flow statements and the three loop forms
//! - Expressions and operator precedence

use super::parser::parse;
use crate::ast::expressions::{BinOp, Expr};
use crate::ast::statements::{Program, Stmt};
use crate::errors::errors::Error;
use crate::lexer::lexer::tokenize;

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.tern".to_string())).unwrap();
    parse(tokens)
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("").unwrap();
    assert!(program.functions.is_empty());
}

#[test]
fn test_parse_void_function() {
    let program = parse_source("define Main() end").unwrap();
    assert_eq!(program.functions.len(), 1);
    assert_eq!(program.functions[0].header.name, "Main");
    assert!(program.functions[0].body.is_empty());
}

#[test]
fn test_parse_typed_function_with_params() {
    let program = parse_source("define int Add(int a, int b) return a + b; end").unwrap();
    let header = &program.functions[0].header;
    assert_eq!(header.params.len(), 2);
    assert_eq!(header.params[0].name, "a");
}

#[test]
fn test_parse_array_return_type() {
    let program = parse_source("define char array Name() return \"x\"; end").unwrap();
    let header = &program.functions[0].header;
    assert_eq!(header.return_type.to_string(), "char array");
}

#[test]
fn test_parse_declaration() {
    let program = parse_source("define Main() int x := 42; end").unwrap();
    assert!(matches!(
        &program.functions[0].body[0],
        Stmt::Declaration { name, .. } if name == "x"
    ));
}

#[test]
fn test_parse_nested_array_declaration() {
    let program = parse_source("define Main() int array array grid := new int array[2]; end")
        .unwrap();
    assert!(matches!(
        &program.functions[0].body[0],
        Stmt::Declaration { declared_type, .. } if declared_type.to_string() == "int array array"
    ));
}

#[test]
fn test_parse_assignment() {
    let program = parse_source("define Main() x := 1; end").unwrap();
    assert!(matches!(
        &program.functions[0].body[0],
        Stmt::Assignment { .. }
    ));
}

#[test]
fn test_parse_indexed_assignment() {
    let program = parse_source("define Main() xs[0] := 1; end").unwrap();
    assert!(matches!(
        &program.functions[0].body[0],
        Stmt::Assignment {
            target: Expr::Index { .. },
            ..
        }
    ));
}

#[test]
fn test_parse_call_statement() {
    let program = parse_source("define Main() Log(1, 'x'); end").unwrap();
    assert!(matches!(
        &program.functions[0].body[0],
        Stmt::Call(call) if call.name == "Log" && call.arguments.len() == 2
    ));
}

#[test]
fn test_parse_if_elseif_else() {
    let program = parse_source(
        "define Main() if a then ; elseif b then ; elseif c then ; else ; end; end",
    )
    .unwrap();
    match &program.functions[0].body[0] {
        Stmt::If {
            elseif_branches,
            else_branch,
            ..
        } => {
            assert_eq!(elseif_branches.len(), 2);
            assert_eq!(else_branch.len(), 1);
        }
        other => panic!("expected an if statement, got {:?}", other),
    }
}

#[test]
fn test_parse_while_loop() {
    let program = parse_source("define Main() while c do x := 1; end; end").unwrap();
    assert!(matches!(&program.functions[0].body[0], Stmt::While { .. }));
}

#[test]
fn test_parse_counted_loop() {
    let program = parse_source("define Main() i := 0 to 9 step 2 do ; end; end").unwrap();
    match &program.functions[0].body[0] {
        Stmt::For { counter, step, .. } => {
            assert_eq!(counter, "i");
            assert!(step.is_some());
        }
        other => panic!("expected a counted loop, got {:?}", other),
    }
}

#[test]
fn test_parse_counted_loop_without_step() {
    let program = parse_source("define Main() i := 0 to 9 do ; end; end").unwrap();
    assert!(matches!(
        &program.functions[0].body[0],
        Stmt::For { step: None, .. }
    ));
}

#[test]
fn test_parse_do_while_loop() {
    let program = parse_source("define Main() do x := 1; while c; end").unwrap();
    assert!(matches!(&program.functions[0].body[0], Stmt::DoWhile { .. }));
}

#[test]
fn test_parse_return_with_and_without_value() {
    let program = parse_source("define Main() return; return 1; end").unwrap();
    assert!(matches!(
        &program.functions[0].body[0],
        Stmt::Return { value: None, .. }
    ));
    assert!(matches!(
        &program.functions[0].body[1],
        Stmt::Return { value: Some(_), .. }
    ));
}

#[test]
fn test_parse_assert() {
    let program = parse_source("define Main() assert x > 0; end").unwrap();
    assert!(matches!(&program.functions[0].body[0], Stmt::Assert { .. }));
}

#[test]
fn test_parse_precedence() {
    // a + b * c parses as a + (b * c)
    let program = parse_source("define Main() x := a + b * c; end").unwrap();
    match &program.functions[0].body[0] {
        Stmt::Assignment {
            value: Expr::Binary { op, right, .. },
            ..
        } => {
            assert_eq!(*op, BinOp::Add);
            assert!(matches!(
                right.as_ref(),
                Expr::Binary { op: BinOp::Mul, .. }
            ));
        }
        other => panic!("expected an assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_power_is_right_associative() {
    // a ** b ** c parses as a ** (b ** c)
    let program = parse_source("define Main() x := a ** b ** c; end").unwrap();
    match &program.functions[0].body[0] {
        Stmt::Assignment {
            value: Expr::Binary { op, left, right, .. },
            ..
        } => {
            assert_eq!(*op, BinOp::Pow);
            assert!(matches!(left.as_ref(), Expr::Variable { .. }));
            assert!(matches!(
                right.as_ref(),
                Expr::Binary { op: BinOp::Pow, .. }
            ));
        }
        other => panic!("expected an assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_logical_precedence() {
    // a and b or c parses as (a and b) or c
    let program = parse_source("define Main() x := a and b or c; end").unwrap();
    assert!(matches!(
        &program.functions[0].body[0],
        Stmt::Assignment {
            value: Expr::Binary { op: BinOp::Or, .. },
            ..
        }
    ));
}

#[test]
fn test_parse_grouping() {
    let program = parse_source("define Main() x := (a + b) * c; end").unwrap();
    assert!(matches!(
        &program.functions[0].body[0],
        Stmt::Assignment {
            value: Expr::Binary { op: BinOp::Mul, .. },
            ..
        }
    ));
}

#[test]
fn test_parse_nested_call_expression() {
    let program = parse_source("define Main() x := Outer(Inner(1), 2); end").unwrap();
    assert!(matches!(
        &program.functions[0].body[0],
        Stmt::Assignment {
            value: Expr::Call(call),
            ..
        } if call.arguments.len() == 2
    ));
}

#[test]
fn test_parse_error_missing_semicolon() {
    assert!(parse_source("define Main() int x := 1 end").is_err());
}

#[test]
fn test_parse_error_bare_expression_statement() {
    assert!(parse_source("define Main() x + 1; end").is_err());
}

#[test]
fn test_parse_error_assignment_to_call() {
    assert!(parse_source("define Main() F(1) := 2; end").is_err());
}

#[test]
fn test_parse_error_missing_end() {
    assert!(parse_source("define Main() int x := 1;").is_err());
}

#[test]
fn test_parse_error_stray_token_at_top_level() {
    assert!(parse_source("int x := 1;").is_err());
}
