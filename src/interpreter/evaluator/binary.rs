use crate::{
    ast::{Expr, InfixOperator},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::Value},
};

impl Environment {
    /// Evaluates an infix operation.
    ///
    /// Both operands are evaluated left to right; the operation itself is
    /// only defined for two integers. Every other operand-type combination
    /// is an error naming both types and the operator.
    ///
    /// # Parameters
    /// - `op`: The operator to apply.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The resulting value: an integer for arithmetic, a boolean for
    /// comparisons.
    pub(crate) fn eval_infix(&mut self,
                             op: InfixOperator,
                             left: &Expr,
                             right: &Expr,
                             line: usize)
                             -> EvalResult<Value> {
        let left = self.eval_value(left)?;
        let right = self.eval_value(right)?;

        match (&left, &right) {
            (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, *l, *r, line),
            _ => Err(RuntimeError::UnknownOperator { operator: op.to_string(),
                                                     left: left.type_name().to_string(),
                                                     right: right.type_name().to_string(),
                                                     line }),
        }
    }
}

/// Applies an infix operator to two integers.
///
/// Arithmetic wraps on overflow, matching 64-bit machine semantics; division
/// and modulo by zero are explicit errors rather than host-level faults.
fn eval_integer_infix(op: InfixOperator, left: i64, right: i64, line: usize) -> EvalResult<Value> {
    match op {
        InfixOperator::Add => Ok(Value::Integer(left.wrapping_add(right))),
        InfixOperator::Sub => Ok(Value::Integer(left.wrapping_sub(right))),
        InfixOperator::Mul => Ok(Value::Integer(left.wrapping_mul(right))),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Ok(Value::Integer(left.wrapping_div(right)))
        },
        InfixOperator::Mod => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Ok(Value::Integer(left.wrapping_rem(right)))
        },
        InfixOperator::Less => Ok(Value::Bool(left < right)),
        InfixOperator::Greater => Ok(Value::Bool(left > right)),
        InfixOperator::LessEqual => Ok(Value::Bool(left <= right)),
        InfixOperator::GreaterEqual => Ok(Value::Bool(left >= right)),
        InfixOperator::Equal => Ok(Value::Bool(left == right)),
        InfixOperator::NotEqual => Ok(Value::Bool(left != right)),
    }
}
