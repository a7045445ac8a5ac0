use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a short-circuiting logical operation.
    ///
    /// The result is one of the operand values, not a coerced boolean:
    /// `or` yields the left value if it is truthy, `and` yields it if it is
    /// falsy, and otherwise both yield the right value. The right operand is
    /// only evaluated when the left one does not decide the result.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The logical operator.
    /// - `right`: Right operand expression.
    pub fn eval_logical(&mut self,
                        left: &Expr,
                        op: LogicalOperator,
                        right: &Expr)
                        -> EvalResult<Value> {
        let left = self.evaluate(left)?;

        let decided = match op {
            LogicalOperator::Or => left.is_truthy(),
            LogicalOperator::And => !left.is_truthy(),
        };

        if decided { Ok(left) } else { self.evaluate(right) }
    }
}
