use std::{io::Write, rc::Rc};

use tracing::trace;

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::function::builtin::BUILTINS,
        value::{
            callable::{Callable, UserFunction},
            core::Value,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `Return` is forwarded unchanged by every enclosing statement, block and
/// loop until the nearest function call turns it back into a plain value.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `return` is unwinding with this value.
    Return(Value),
}

/// Stores the runtime evaluation state.
///
/// An `Interpreter` owns the currently active scope (initially the global
/// scope, with the native built-ins already defined), the number of user
/// function calls in progress, and the sink `print` writes to.
pub struct Interpreter {
    environment:      EnvRef,
    pub(super) depth: usize,
    out:              Box<dyn Write>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
         .field("environment", &self.environment)
         .field("depth", &self.depth)
         .finish_non_exhaustive()
    }
}

impl Interpreter {
    /// Creates an interpreter printing to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Box::new(std::io::stdout()))
    }

    /// Creates an interpreter printing to `out`.
    ///
    /// The global scope is populated with the native built-ins.
    #[must_use]
    pub fn with_output(out: Box<dyn Write>) -> Self {
        let globals = Environment::new_global();
        for native in BUILTINS {
            globals.borrow_mut()
                   .define(native.name, Callable::Native(*native).into());
        }

        Self { environment: globals,
               depth: 0,
               out }
    }

    /// Executes a program.
    ///
    /// Statements run in order against the global scope. A `return` at the
    /// top level ends the program early without an error.
    ///
    /// # Errors
    /// The first runtime error raised by any statement; execution stops there.
    pub fn interpret(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        for statement in statements {
            if let Flow::Return(_) = self.execute(statement)? {
                trace!("top-level return");
                break;
            }
        }
        self.out.flush().map_err(|source| RuntimeError::Flush { source })
    }

    /// Executes a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// [`Flow::Return`] if a `return` is unwinding through this statement,
    /// otherwise [`Flow::Normal`].
    pub fn execute(&mut self, statement: &Stmt) -> EvalResult<Flow> {
        match statement {
            Stmt::Expression { expr } => {
                self.evaluate(expr)?;
                Ok(Flow::Normal)
            },
            Stmt::Print { expr, line } => {
                let value = self.evaluate(expr)?;
                writeln!(self.out, "{value}").map_err(|source| RuntimeError::Output { source,
                                                                                     line: *line })?;
                Ok(Flow::Normal)
            },
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.borrow_mut().define(name.as_str(), value);
                Ok(Flow::Normal)
            },
            Stmt::Block { statements } => {
                let scope = Environment::new_enclosed(&self.environment);
                self.execute_block(statements, scope)
            },
            Stmt::If { condition,
                       then_branch,
                       else_branch, } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(otherwise) = else_branch {
                    self.execute(otherwise)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let Flow::Return(value) = self.execute(body)? {
                        return Ok(Flow::Return(value));
                    }
                }
                Ok(Flow::Normal)
            },
            Stmt::Function(declaration) => {
                let function = UserFunction { declaration: Rc::clone(declaration),
                                              closure:     Rc::clone(&self.environment), };
                self.environment
                    .borrow_mut()
                    .define(declaration.name.as_str(), Callable::User(function).into());
                Ok(Flow::Normal)
            },
            Stmt::Return { value } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return(value))
            },
        }
    }

    /// Executes `statements` with `scope` as the active environment.
    ///
    /// The previously active environment is restored on every exit path:
    /// normal completion, an unwinding `return`, and a runtime error.
    pub fn execute_block(&mut self, statements: &[Stmt], scope: EnvRef) -> EvalResult<Flow> {
        trace!(statements = statements.len(), "enter scope");
        let previous = std::mem::replace(&mut self.environment, scope);
        let result = self.execute_all(statements);
        self.environment = previous;
        result
    }

    fn execute_all(&mut self, statements: &[Stmt]) -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.execute(statement)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; only assignment and calls have
    /// side effects.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new();
    /// let expr = Expr::Binary { left:  Box::new(Expr::Literal { value: 1.0.into() }),
    ///                           op:    BinaryOperator::Add,
    ///                           right: Box::new(Expr::Literal { value: 2.0.into() }),
    ///                           line:  1, };
    ///
    /// assert_eq!(interpreter.evaluate(&expr).unwrap(), Value::Number(3.0));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(value.into()),
            Expr::Grouping { expr } => self.evaluate(expr),
            Expr::Unary { op, expr, line } => {
                let operand = self.evaluate(expr)?;
                Self::eval_unary(*op, &operand, *line)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Logical { left, op, right } => self.eval_logical(left, *op, right),
            Expr::Variable { name, line } => self.environment.borrow().get(name, *line),
            Expr::Assign { name, value, line } => {
                let value = self.evaluate(value)?;
                self.environment
                    .borrow_mut()
                    .assign(name, value.clone(), *line)?;
                Ok(value)
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
        }
    }
}
