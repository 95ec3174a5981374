//! Integration tests for the full front-end pipeline.
//!
//! These tests verify that source text flows correctly through
//! tokenization, parsing and semantic checking, and that diagnostics
//! come out positioned where the language rules say they should.

use tern::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    get_line_at_position,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::check,
};

fn check_source(source: &str) -> Result<(), Error> {
    let tokens = tokenize(source.to_string(), Some("test.tern".to_string()))?;
    let program = parse(tokens)?;
    check(&program)
}

#[test]
fn test_well_typed_program() {
    let source = "
        define int Fib(int n)
            if n < 2 then
                return n;
            end;
            return Fib(n - 1) + Fib(n - 2);
        end

        define Main()
            int result := Fib(10);
            assert result = 55;
        end
    ";
    assert!(check_source(source).is_ok());
}

#[test]
fn test_full_language_surface() {
    let source = "
        define char array Render(int width)
            char array line := new char[width];
            i := 0 to width - 1 do
                line[i] := '*';
            end;
            return line;
        end

        define int Sum(int array xs, int count)
            int total := 0;
            int index := 0;
            while index < count do
                total := total + xs[index];
                index := index + 1;
            end;
            do
                total := total - 0;
            while F;
            return total;
        end

        define Main()
            int array xs := new int[3];
            xs[0] := {16}FF;
            xs[1] := 'b' - 1 + 0;
            if Sum(xs, 3) > 0 then
                Render(8);
            elseif Sum(xs, 3) = 0 then
                ;
            else
                assert not (Sum(xs, 3) > 0);
            end;
        end
    ";
    assert!(check_source(source).is_ok());
}

#[test]
fn test_duplicate_function_positioned_at_second_declaration() {
    let source = "define First() end\ndefine Twice() end\ndefine Twice() end\n";
    let error = check_source(source).err().unwrap();

    assert!(matches!(
        error.kind(),
        ErrorImpl::RepeatedFunction { name } if name == "Twice"
    ));
    let (line, _, _) = get_line_at_position(source, error.position().0);
    assert_eq!(line, 3);
}

#[test]
fn test_undeclared_function_positioned_at_call_site() {
    let source = "define Outer()\n    int x := 1;\n    G(x);\nend\n";
    let error = check_source(source).err().unwrap();

    assert!(matches!(
        error.kind(),
        ErrorImpl::UndeclaredFunction { name } if name == "G"
    ));
    let (line, _, column) = get_line_at_position(source, error.position().0);
    assert_eq!(line, 3);
    assert_eq!(column, 4);
}

#[test]
fn test_branch_isolation_end_to_end() {
    let source = "
        define Main()
            if T then
                int x := 1;
            else
                x := 2;
            end;
        end
    ";
    let error = check_source(source).err().unwrap();
    assert!(matches!(
        error.kind(),
        ErrorImpl::UndeclaredVariable { name } if name == "x"
    ));
}

#[test]
fn test_boolean_conjunction_end_to_end() {
    let source = "
        define Main()
            bool b := T;
            bool c := b and F;
        end
    ";
    assert!(check_source(source).is_ok());
}

#[test]
fn test_integer_plus_boolean_end_to_end() {
    let source = "
        define Main()
            int i := 1 + T;
        end
    ";
    let error = check_source(source).err().unwrap();
    assert!(matches!(
        error.kind(),
        ErrorImpl::WrongBinOperandTypes { left, right, .. }
            if *left == Type::INTEGER && *right == Type::BOOLEAN
    ));
}

#[test]
fn test_declaration_mismatch_positioned_at_type() {
    let source = "define Main()\n    int flag := T;\nend\n";
    let error = check_source(source).err().unwrap();

    assert!(matches!(error.kind(), ErrorImpl::MismatchedType { .. }));
    let (line, _, column) = get_line_at_position(source, error.position().0);
    assert_eq!(line, 2);
    assert_eq!(column, 4);
}

#[test]
fn test_fail_fast_reports_only_first_error() {
    // Both statements are ill-typed; the first one must be reported.
    let source = "
        define Main()
            int a := T;
            int b := F;
        end
    ";
    let error = check_source(source).err().unwrap();
    let (line, _, _) = get_line_at_position(source, error.position().0);
    assert_eq!(line, 3);
}

#[test]
fn test_lex_error_reaches_caller() {
    let error = check_source("define Main() int x := @; end").err().unwrap();
    assert!(matches!(error.kind(), ErrorImpl::UnrecognisedToken { .. }));
}

#[test]
fn test_parse_error_reaches_caller() {
    let error = check_source("define Main() int x := ; end").err().unwrap();
    assert!(matches!(error.kind(), ErrorImpl::UnexpectedToken { .. }));
}

#[test]
fn test_malformed_radix_literal() {
    let error = check_source("define Main() int x := {99}Z; end").err().unwrap();
    assert!(matches!(error.kind(), ErrorImpl::NumberParseError { .. }));
}

#[test]
fn test_malformed_char_literal() {
    let error = check_source("define Main() char c := '#WOMBAT'; end")
        .err()
        .unwrap();
    assert!(matches!(error.kind(), ErrorImpl::CharParseError { .. }));
}

#[test]
fn test_string_escapes_end_to_end() {
    let source = "
        define Main()
            char array greeting := \"say $QUOT hi $QUOT$LF\";
            char quote := greeting[4];
        end
    ";
    assert!(check_source(source).is_ok());
}

#[test]
fn test_array_equality_end_to_end() {
    let source = "
        define Main()
            int array a := new int[2];
            int array b := new int[2];
            bool same := a = b;
        end
    ";
    assert!(check_source(source).is_ok());
}

#[test]
fn test_array_equality_different_element_types() {
    let source = "
        define Main()
            int array a := new int[2];
            char array b := new char[2];
            bool same := a = b;
        end
    ";
    let error = check_source(source).err().unwrap();
    assert!(matches!(
        error.kind(),
        ErrorImpl::WrongBinOperandTypes { .. }
    ));
}

#[test]
fn test_void_call_as_initializer_fails() {
    let source = "
        define Log() end
        define Main()
            int x := Log();
        end
    ";
    let error = check_source(source).err().unwrap();
    assert!(matches!(
        error.kind(),
        ErrorImpl::MismatchedType { actual, .. } if *actual == Type::VOID
    ));
}
