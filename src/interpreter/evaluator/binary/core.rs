use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// Arithmetic operators go to `eval_scalar_op`, ordering operators to
    /// `eval_comparison`, and equality is answered directly since it is
    /// defined for every pair of values.
    ///
    /// # Parameters
    /// - `op`: The operator.
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
    /// let result = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                       &Value::from("foo"),
    ///                                       &Value::from("bar"),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::from("foobar"));
    ///
    /// let result =
    ///     Interpreter::eval_binary(BinaryOperator::Equal, &Value::Nil, &Value::Bool(false), 1);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, left, right, line),
            Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            Equal => Ok(Value::Bool(left == right)),
            NotEqual => Ok(Value::Bool(left != right)),
        }
    }
}
