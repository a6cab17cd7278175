use crate::{
    ast::{Block, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Flow, MAX_LOOP_ITERATIONS},
        value::Value,
    },
};

impl Environment {
    /// Evaluates a `jaha_tak` loop.
    ///
    /// The condition is re-tested before every iteration; each iteration
    /// runs the body in its own child scope, whose printed output is flushed
    /// to the enclosing scope when the iteration ends. A `bas_kar` signal
    /// ends the loop immediately with `Null`; an `aage_badh` signal skips
    /// the rest of the current body and re-tests the condition.
    ///
    /// The iteration counter is capped at [`MAX_LOOP_ITERATIONS`]; running
    /// past it is an error, never a hang.
    ///
    /// # Parameters
    /// - `condition`: The loop condition.
    /// - `body`: The loop body.
    /// - `line`: Line number of the `jaha_tak` keyword.
    ///
    /// # Returns
    /// The last completed body value, or `Null` when the loop never ran or
    /// was ended by `bas_kar`.
    pub(crate) fn eval_while(&mut self,
                             condition: &Expr,
                             body: &Block,
                             line: usize)
                             -> EvalResult<Flow> {
        let mut iterations = 0_usize;
        let mut result = Value::Null;

        while self.eval_value(condition)?.is_truthy() {
            iterations += 1;
            if iterations > MAX_LOOP_ITERATIONS {
                return Err(RuntimeError::LoopLimitExceeded { limit: MAX_LOOP_ITERATIONS,
                                                             line });
            }

            match self.eval_block(body)? {
                Flow::Break => {
                    result = Value::Null;
                    break;
                },
                Flow::Continue => {},
                Flow::Value(value) => result = value,
            }
        }

        Ok(Flow::Value(result))
    }

    /// Evaluates a `chal_bhai` loop.
    ///
    /// The loop header gets its own enclosing scope so the init statement's
    /// binding lives across iterations but not past the loop. The body runs
    /// in a child scope per iteration. `aage_badh` skips the rest of the
    /// body but still runs the update clause before the condition is
    /// re-tested; `bas_kar` ends the loop without running the update again.
    ///
    /// # Parameters
    /// - `init`: Optional statement run once before the first test.
    /// - `condition`: Optional condition; when omitted the loop only ends
    ///   through `bas_kar` or the iteration cap.
    /// - `update`: Optional statement run after every iteration.
    /// - `body`: The loop body.
    /// - `line`: Line number of the `chal_bhai` keyword.
    ///
    /// # Returns
    /// The last completed body value, or `Null` when the loop never ran or
    /// was ended by `bas_kar`.
    pub(crate) fn eval_for(&mut self,
                           init: Option<&Statement>,
                           condition: Option<&Expr>,
                           update: Option<&Statement>,
                           body: &Block,
                           line: usize)
                           -> EvalResult<Flow> {
        self.push_scope();
        let result = self.run_for(init, condition, update, body, line);
        self.pop_scope();

        result.map(Flow::Value)
    }

    fn run_for(&mut self,
               init: Option<&Statement>,
               condition: Option<&Expr>,
               update: Option<&Statement>,
               body: &Block,
               line: usize)
               -> EvalResult<Value> {
        if let Some(init) = init {
            self.eval_statement(init)?;
        }

        let mut iterations = 0_usize;
        let mut result = Value::Null;

        loop {
            let proceed = match condition {
                Some(condition) => self.eval_value(condition)?.is_truthy(),
                None => true,
            };
            if !proceed {
                break;
            }

            iterations += 1;
            if iterations > MAX_LOOP_ITERATIONS {
                return Err(RuntimeError::LoopLimitExceeded { limit: MAX_LOOP_ITERATIONS,
                                                             line });
            }

            match self.eval_block(body)? {
                Flow::Break => {
                    result = Value::Null;
                    break;
                },
                Flow::Continue => {},
                Flow::Value(value) => result = value,
            }

            if let Some(update) = update {
                self.eval_statement(update)?;
            }
        }

        Ok(result)
    }
}
