use std::io::BufRead;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Flow},
        value::Value,
    },
};

/// The literal name of the print built-in.
pub const PRINT_BUILTIN: &str = "bol_bhai";

impl Environment {
    /// Evaluates a call expression.
    ///
    /// The language has exactly one callable: the print built-in, recognized
    /// by its literal name. Its arguments are evaluated left to right and
    /// each rendering is appended to the output in argument order; the call
    /// itself yields `Null`. Calling any other name is an error naming the
    /// unknown function.
    pub(crate) fn eval_call(&mut self,
                            function: &str,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<Flow> {
        if function == PRINT_BUILTIN {
            for argument in arguments {
                let value = self.eval_value(argument)?;
                self.emit_line(&value.to_string());
            }

            return Ok(Flow::Value(Value::Null));
        }

        Err(RuntimeError::UnknownFunction { name: function.to_string(),
                                            line })
    }

    /// Evaluates the `suna_bhai` input primitive.
    ///
    /// Blocks until one line is available on standard input, then coerces
    /// it: an integer if the line parses as one, a boolean for the literal
    /// words `sach`/`jhuth`, otherwise the trimmed text as a string. Only
    /// meaningful in an interactive deployment.
    pub(crate) fn eval_input(&mut self, line: usize) -> EvalResult<Value> {
        let mut buffer = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut buffer)
            .map_err(|_| RuntimeError::InputFailed { line })?;

        Ok(coerce_input(buffer.trim()))
    }
}

/// Coerces one line of user input to a runtime value: integer, then boolean,
/// then string.
fn coerce_input(text: &str) -> Value {
    if let Ok(value) = text.parse::<i64>() {
        return Value::Integer(value);
    }

    match text {
        "sach" => Value::Bool(true),
        "jhuth" => Value::Bool(false),
        _ => Value::Str(text.to_string()),
    }
}
