use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::number_operands,
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates an arithmetic operation.
    ///
    /// `+` adds two numbers or concatenates two strings; every other pairing
    /// is an error. `-`, `*` and `/` require two numbers. Division follows
    /// IEEE-754, so dividing by zero yields an infinity or `NaN` rather than
    /// an error.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul` or `Div`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let x = Value::Number(1.5);
    /// let y = Value::Number(2.0);
    ///
    /// let result = Interpreter::eval_scalar_op(BinaryOperator::Mul, &x, &y, 1).unwrap();
    /// assert_eq!(result, Value::Number(3.0));
    ///
    /// let result = Interpreter::eval_scalar_op(BinaryOperator::Div, &x, &Value::Number(0.0), 1);
    /// assert_eq!(result.unwrap(), Value::Number(f64::INFINITY));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if op == Add {
            return match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(format!("{a}{b}").into()),
                _ => Err(RuntimeError::OperandsMustBeNumbersOrStrings { line }),
            };
        }

        let (a, b) = number_operands(left, right, line)?;
        Ok(Value::Number(match op {
                             Sub => a - b,
                             Mul => a * b,
                             Div => a / b,
                             _ => unreachable!("eval_scalar_op used with non arithmetic operator"),
                         }))
    }
}
