use std::collections::HashMap;

use crate::ast::expressions::{CallExpr, Expr, UnaryOp};
use crate::ast::statements::{Function, Param, Program, Stmt};
use crate::ast::types::Type;
use crate::errors::errors::{Error, ErrorImpl};

use super::ops::{binary_result_type, unary_result_type};

/// The scope table of one block: variable name to declared type.
///
/// A fresh scope is created per function body. Entering any branch or
/// loop body checks against a `child()` copy, so declarations made
/// inside a block are visible to nested statements but never to sibling
/// branches or to statements after the block. Declaring overwrites any
/// existing binding in the current copy.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: HashMap<String, Type>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            bindings: HashMap::new(),
        }
    }

    pub fn declare(&mut self, name: String, declared_type: Type) {
        self.bindings.insert(name, declared_type);
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.bindings.get(name)
    }

    /// An independent copy for checking a nested block.
    pub fn child(&self) -> Scope {
        self.clone()
    }
}

/// The signature a call site is validated against.
#[derive(Debug, Clone)]
pub struct Signature {
    pub return_type: Type,
    pub params: Vec<Param>,
}

/// Whole-program mapping from function name to signature, completed
/// before any body is checked so declaration order never matters and
/// mutual recursion works.
#[derive(Debug, Default)]
pub struct FunctionTable {
    functions: HashMap<String, Signature>,
}

impl FunctionTable {
    /// Builds the table in one pass over the program. A name collision
    /// is a terminal error positioned at the second declaration.
    pub fn build(program: &Program) -> Result<FunctionTable, Error> {
        let mut functions = HashMap::new();

        for function in &program.functions {
            if functions.contains_key(&function.header.name) {
                return Err(Error::new(
                    ErrorImpl::RepeatedFunction {
                        name: function.header.name.clone(),
                    },
                    function.position.clone(),
                ));
            }
            functions.insert(
                function.header.name.clone(),
                Signature {
                    return_type: function.header.return_type.clone(),
                    params: function.header.params.clone(),
                },
            );
        }

        Ok(FunctionTable { functions })
    }

    pub fn get(&self, name: &str) -> Option<&Signature> {
        self.functions.get(name)
    }
}

/// Checks a whole program: builds the function table, then walks every
/// function body. The first error anywhere aborts the check.
pub fn check(program: &Program) -> Result<(), Error> {
    let functions = FunctionTable::build(program)?;

    for function in &program.functions {
        check_function(&functions, function)?;
    }

    Ok(())
}

fn check_function(functions: &FunctionTable, function: &Function) -> Result<(), Error> {
    let mut scope = Scope::new();
    for param in &function.header.params {
        scope.declare(param.name.clone(), param.param_type.clone());
    }

    let checker = Checker {
        functions,
        return_type: &function.header.return_type,
    };

    for stmt in &function.body {
        checker.check_stmt(&mut scope, stmt)?;
    }

    Ok(())
}

/// The tree walk. Carries the read-only function table and the declared
/// return type of the function whose body is being checked; the scope
/// table is threaded through the calls so branches can fork it.
struct Checker<'a> {
    functions: &'a FunctionTable,
    return_type: &'a Type,
}

impl Checker<'_> {
    fn check_stmt(&self, scope: &mut Scope, stmt: &Stmt) -> Result<(), Error> {
        match stmt {
            Stmt::Declaration {
                declared_type,
                name,
                init,
                type_position,
            } => {
                let actual = self.type_of(scope, init)?;
                if actual != *declared_type {
                    return Err(Error::new(
                        ErrorImpl::MismatchedType {
                            expected: declared_type.clone(),
                            actual,
                        },
                        type_position.clone(),
                    ));
                }
                scope.declare(name.clone(), declared_type.clone());
                Ok(())
            }
            Stmt::Assignment { target, value } => {
                let expected = self.type_of(scope, target)?;
                let actual = self.type_of(scope, value)?;
                if actual != expected {
                    return Err(Error::new(
                        ErrorImpl::MismatchedType { expected, actual },
                        target.position().clone(),
                    ));
                }
                Ok(())
            }
            Stmt::Call(call) => {
                // A call statement may invoke a function of any return
                // type; the result is discarded.
                self.check_call(scope, call)?;
                Ok(())
            }
            Stmt::If {
                condition,
                then_branch,
                elseif_branches,
                else_branch,
            } => {
                self.expect_type(scope, condition, &Type::BOOLEAN)?;
                self.check_block(scope, then_branch)?;
                for branch in elseif_branches {
                    self.expect_type(scope, &branch.condition, &Type::BOOLEAN)?;
                    self.check_block(scope, &branch.body)?;
                }
                self.check_block(scope, else_branch)
            }
            Stmt::While { condition, body } => {
                self.expect_type(scope, condition, &Type::BOOLEAN)?;
                self.check_block(scope, body)
            }
            Stmt::DoWhile { body, condition } => {
                // Body before condition, matching source order.
                self.check_block(scope, body)?;
                self.expect_type(scope, condition, &Type::BOOLEAN)
            }
            Stmt::For {
                counter,
                from,
                to,
                step,
                body,
            } => {
                self.expect_type(scope, from, &Type::INTEGER)?;
                self.expect_type(scope, to, &Type::INTEGER)?;
                if let Some(step) = step {
                    self.expect_type(scope, step, &Type::INTEGER)?;
                }

                // The counter exists only inside the body's copy of the
                // scope, typed as an integer.
                let mut inner = scope.child();
                inner.declare(counter.clone(), Type::INTEGER);
                for stmt in body {
                    self.check_stmt(&mut inner, stmt)?;
                }
                Ok(())
            }
            Stmt::Return { value, position } => match value {
                Some(value) => {
                    let actual = self.type_of(scope, value)?;
                    if actual != *self.return_type {
                        return Err(Error::new(
                            ErrorImpl::MismatchedType {
                                expected: self.return_type.clone(),
                                actual,
                            },
                            value.position().clone(),
                        ));
                    }
                    Ok(())
                }
                None => {
                    if *self.return_type != Type::VOID {
                        return Err(Error::new(
                            ErrorImpl::MismatchedType {
                                expected: self.return_type.clone(),
                                actual: Type::VOID,
                            },
                            position.clone(),
                        ));
                    }
                    Ok(())
                }
            },
            Stmt::Assert { condition } => self.expect_type(scope, condition, &Type::BOOLEAN),
            Stmt::Empty => Ok(()),
        }
    }

    /// Checks a branch or loop body against an independent copy of the
    /// enclosing scope.
    fn check_block(&self, scope: &Scope, stmts: &[Stmt]) -> Result<(), Error> {
        let mut inner = scope.child();
        for stmt in stmts {
            self.check_stmt(&mut inner, stmt)?;
        }
        Ok(())
    }

    fn expect_type(&self, scope: &Scope, expr: &Expr, expected: &Type) -> Result<(), Error> {
        let actual = self.type_of(scope, expr)?;
        if actual != *expected {
            return Err(Error::new(
                ErrorImpl::MismatchedType {
                    expected: expected.clone(),
                    actual,
                },
                expr.position().clone(),
            ));
        }
        Ok(())
    }

    /// Validates a call site and returns the callee's declared return
    /// type. Arguments are checked left to right; the first mismatch
    /// wins, positioned at that argument.
    fn check_call(&self, scope: &Scope, call: &CallExpr) -> Result<Type, Error> {
        let signature = match self.functions.get(&call.name) {
            Some(signature) => signature,
            None => {
                return Err(Error::new(
                    ErrorImpl::UndeclaredFunction {
                        name: call.name.clone(),
                    },
                    call.position.clone(),
                ))
            }
        };

        if call.arguments.len() != signature.params.len() {
            return Err(Error::new(
                ErrorImpl::WrongArgsCount {
                    actual: call.arguments.len(),
                    expected: signature.params.len(),
                },
                call.position.clone(),
            ));
        }

        for (argument, param) in call.arguments.iter().zip(&signature.params) {
            let actual = self.type_of(scope, argument)?;
            if actual != param.param_type {
                return Err(Error::new(
                    ErrorImpl::MismatchedType {
                        expected: param.param_type.clone(),
                        actual,
                    },
                    argument.position().clone(),
                ));
            }
        }

        Ok(signature.return_type.clone())
    }

    /// Computes the type of an expression, or the first error inside it.
    fn type_of(&self, scope: &Scope, expr: &Expr) -> Result<Type, Error> {
        match expr {
            Expr::Variable { name, position } => match scope.get(name) {
                Some(declared) => Ok(declared.clone()),
                None => Err(Error::new(
                    ErrorImpl::UndeclaredVariable { name: name.clone() },
                    position.clone(),
                )),
            },
            Expr::Literal { value, .. } => Ok(value.literal_type()),
            Expr::Binary {
                op,
                left,
                right,
                position,
            } => {
                let left_type = self.type_of(scope, left)?;
                let right_type = self.type_of(scope, right)?;
                binary_result_type(*op, &left_type, &right_type).ok_or_else(|| {
                    Error::new(
                        ErrorImpl::WrongBinOperandTypes {
                            op: *op,
                            left: left_type,
                            right: right_type,
                        },
                        position.clone(),
                    )
                })
            }
            Expr::Unary {
                op,
                operand,
                position,
            } => {
                let operand_type = self.type_of(scope, operand)?;
                unary_result_type(*op, &operand_type).ok_or_else(|| {
                    Error::new(
                        ErrorImpl::WrongUnaryOperandTypes {
                            op: *op,
                            operand: operand_type,
                        },
                        position.clone(),
                    )
                })
            }
            Expr::Index {
                array,
                index,
                position,
            } => {
                let array_type = self.type_of(scope, array)?;
                let element_type = match array_type {
                    Type::Array(element) => *element,
                    other => {
                        return Err(Error::new(
                            ErrorImpl::WrongUnaryOperandTypes {
                                op: UnaryOp::Index,
                                operand: other,
                            },
                            position.clone(),
                        ))
                    }
                };
                self.expect_type(scope, index, &Type::INTEGER)?;
                Ok(element_type)
            }
            Expr::NewArray {
                element_type,
                size,
                position: _,
            } => {
                self.expect_type(scope, size, &Type::INTEGER)?;
                Ok(Type::array(element_type.clone()))
            }
            Expr::Call(call) => self.check_call(scope, call),
        }
    }
}
