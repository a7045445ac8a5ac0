use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Flow, Interpreter},
            utils::{check_arity, ensure_sufficient_stack},
        },
        value::{callable::Callable, core::Value},
    },
};

/// Deepest chain of user function calls allowed to be in progress at once.
pub const MAX_CALL_DEPTH: usize = 1000;

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then every argument from left to
    /// right. Only then is the callee checked for being callable and the
    /// argument count checked against its arity.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line of the call's closing parenthesis.
    ///
    /// # Returns
    /// The value the function returned, `nil` if it returned nothing.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<Value> {
        let callee = self.evaluate(callee)?;
        let arg_vals = arguments.iter()
                                .map(|argument| self.evaluate(argument))
                                .collect::<EvalResult<Vec<_>>>()?;

        let Value::Callable(function) = callee else {
            return Err(RuntimeError::NotCallable { line });
        };

        check_arity(&arg_vals, function.arity(), line)?;
        self.call(&function, arg_vals, line)
    }

    /// Invokes a callable with arguments whose count already matches its
    /// arity.
    ///
    /// Natives run directly. A user function gets a fresh scope enclosed by
    /// the environment it captured at its declaration, not by the caller's
    /// scope; its parameters are bound there before the body runs.
    ///
    /// # Errors
    /// `RuntimeError::StackOverflow` at `line` when [`MAX_CALL_DEPTH`] user
    /// calls are already in progress, plus any error raised by the body.
    pub fn call(&mut self,
                function: &Callable,
                arg_vals: Vec<Value>,
                line: usize)
                -> EvalResult<Value> {
        trace!(function = function.name(), args = arg_vals.len(), "call");

        match function {
            Callable::Native(native) => Ok((native.func)(&arg_vals)),
            Callable::User(user) => {
                if self.depth >= MAX_CALL_DEPTH {
                    return Err(RuntimeError::StackOverflow { line });
                }

                let scope = Environment::new_enclosed(&user.closure);
                {
                    let mut scope = scope.borrow_mut();
                    for (param, value) in user.declaration.params.iter().zip(arg_vals) {
                        scope.define(param.as_str(), value);
                    }
                }

                self.depth += 1;
                let flow =
                    ensure_sufficient_stack(|| self.execute_block(&user.declaration.body, scope));
                self.depth -= 1;

                match flow? {
                    Flow::Return(value) => Ok(value),
                    Flow::Normal => Ok(Value::Nil),
                }
            },
        }
    }
}
