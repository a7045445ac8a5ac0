use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::number_operands,
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates an ordering comparison (`<`, `>`, `<=`, `>=`).
    ///
    /// Both operands must be numbers; comparing strings, booleans or mixed
    /// kinds is an error. Any comparison involving `NaN` is false.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let a = Value::Number(3.0);
    /// let b = Value::Number(5.0);
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Less, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Less, &a, &Value::from("5"), 1);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let (a, b) = number_operands(left, right, line)?;

        Ok(Value::Bool(match op {
                           BinaryOperator::Less => a < b,
                           BinaryOperator::Greater => a > b,
                           BinaryOperator::LessEqual => a <= b,
                           BinaryOperator::GreaterEqual => a >= b,
                           _ => unreachable!("eval_comparison used with non ordering operator"),
                       }))
    }
}
