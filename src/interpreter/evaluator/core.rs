use crate::{
    ast::{Block, ElseIf, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. Errors propagate unchanged to the
/// top of the call chain; there is no recovery.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The fixed iteration limit shared by both loop forms. A loop that runs
/// past it fails with [`RuntimeError::LoopLimitExceeded`] instead of hanging
/// the process.
pub const MAX_LOOP_ITERATIONS: usize = 10_000;

/// The outcome of evaluating a statement or block.
///
/// `bas_kar` and `aage_badh` are not runtime values — they are control
/// signals that unwind statement sequences until a loop consumes them. This
/// enum keeps them apart from ordinary values so every propagation site is
/// an exhaustively checked match.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Ordinary completion with a value.
    Value(Value),
    /// A `bas_kar` signal travelling towards the innermost loop.
    Break,
    /// An `aage_badh` signal travelling towards the innermost loop.
    Continue,
}

impl Flow {
    /// Collapses the outcome into a plain value. Control signals have no
    /// value of their own and collapse to `Null`; this is what happens when
    /// a `bas_kar`/`aage_badh` escapes into a position that needs a value,
    /// such as the top level of a program.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Value(value) => value,
            Self::Break | Self::Continue => Value::Null,
        }
    }
}

impl Environment {
    /// Evaluates a complete program against this environment.
    ///
    /// Statements run in source order. The first runtime error stops
    /// execution and is returned; `bas_kar`/`aage_badh` at the top level are
    /// not meaningful and collapse to `Null` without stopping the program.
    ///
    /// # Parameters
    /// - `program`: The parsed program. Must have parsed without errors.
    ///
    /// # Returns
    /// The value of the last statement, or `Null` for an empty program.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Value> {
        let mut result = Value::Null;

        for statement in &program.statements {
            result = self.eval_statement(statement)?.into_value();
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// The statement's outcome: a value for declarations, assignments,
    /// prints, and expressions; a control signal for `bas_kar`/`aage_badh`.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval_value(value)?;
                self.declare(name, value.clone());
                Ok(Flow::Value(value))
            },
            Statement::Assign { name, value, .. } => {
                let value = self.eval_value(value)?;
                self.assign(name, value.clone());
                Ok(Flow::Value(value))
            },
            Statement::Print { value, .. } => {
                let value = self.eval_value(value)?;
                self.emit_line(&value.to_string());
                Ok(Flow::Value(value))
            },
            Statement::Break { .. } => Ok(Flow::Break),
            Statement::Continue { .. } => Ok(Flow::Continue),
            Statement::Expression { expr, .. } => self.eval_expression(expr),
        }
    }

    /// Evaluates a block in a fresh child scope.
    ///
    /// The scope is popped — and its output flushed to the parent — whether
    /// the block completes, signals, or fails.
    pub(crate) fn eval_block(&mut self, block: &Block) -> EvalResult<Flow> {
        self.push_scope();
        let flow = self.eval_statements(&block.statements);
        self.pop_scope();

        flow
    }

    /// Runs a statement sequence, stopping at the first control signal.
    ///
    /// The sequence's value is the last statement's value, or `Null` for an
    /// empty sequence.
    fn eval_statements(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        let mut result = Flow::Value(Value::Null);

        for statement in statements {
            match self.eval_statement(statement)? {
                Flow::Value(value) => result = Flow::Value(value),
                signal => return Ok(signal),
            }
        }

        Ok(result)
    }

    /// Evaluates an expression.
    ///
    /// The control constructs (`agar`, `jaha_tak`, `chal_bhai`) are
    /// expressions in this grammar, and an `agar` body may contain
    /// `bas_kar`/`aage_badh`, so expression evaluation produces a [`Flow`]
    /// rather than a bare value.
    pub(crate) fn eval_expression(&mut self, expr: &Expr) -> EvalResult<Flow> {
        match expr {
            Expr::IntegerLiteral { value, .. } => Ok(Flow::Value(Value::Integer(*value))),
            Expr::StringLiteral { value, .. } => Ok(Flow::Value(Value::Str(value.clone()))),
            Expr::BooleanLiteral { value, .. } => Ok(Flow::Value(Value::Bool(*value))),
            Expr::Identifier { name, line } => {
                match self.get(name) {
                    Some(value) => Ok(Flow::Value(value.clone())),
                    None => Err(RuntimeError::IdentifierNotFound { name: name.clone(),
                                                                   line: *line, }),
                }
            },
            Expr::ArrayLiteral { elements, line } => {
                self.eval_array_literal(elements, *line).map(Flow::Value)
            },
            Expr::Index { array, index, line } => {
                self.eval_index(array, index, *line).map(Flow::Value)
            },
            Expr::Infix { op, left, right, line } => {
                self.eval_infix(*op, left, right, *line).map(Flow::Value)
            },
            Expr::Call { function,
                         arguments,
                         line, } => self.eval_call(function, arguments, *line),
            Expr::If { condition,
                       consequence,
                       else_ifs,
                       alternative,
                       .. } => self.eval_if(condition, consequence, else_ifs, alternative.as_ref()),
            Expr::While { condition, body, line } => self.eval_while(condition, body, *line),
            Expr::For { init,
                        condition,
                        update,
                        body,
                        line, } => self.eval_for(init.as_deref(),
                                                 condition.as_deref(),
                                                 update.as_deref(),
                                                 body,
                                                 *line),
            Expr::Input { line } => self.eval_input(*line).map(Flow::Value),
        }
    }

    /// Evaluates an expression in a position that needs a plain value, such
    /// as an operand, a condition, or a bound initializer. Stray control
    /// signals collapse to `Null` here.
    pub(crate) fn eval_value(&mut self, expr: &Expr) -> EvalResult<Value> {
        Ok(self.eval_expression(expr)?.into_value())
    }

    /// Evaluates an `agar` expression: the consequence on a truthy
    /// condition, otherwise the first `nahi_to_agar` branch whose condition
    /// is truthy, otherwise the `nahi_to` block, otherwise `Null`.
    fn eval_if(&mut self,
               condition: &Expr,
               consequence: &Block,
               else_ifs: &[ElseIf],
               alternative: Option<&Block>)
               -> EvalResult<Flow> {
        if self.eval_value(condition)?.is_truthy() {
            return self.eval_block(consequence);
        }

        for branch in else_ifs {
            if self.eval_value(&branch.condition)?.is_truthy() {
                return self.eval_block(&branch.block);
            }
        }

        match alternative {
            Some(block) => self.eval_block(block),
            None => Ok(Flow::Value(Value::Null)),
        }
    }

    /// Evaluates the elements of an array literal in order and enforces that
    /// every element shares the first element's runtime type.
    fn eval_array_literal(&mut self, elements: &[Expr], line: usize) -> EvalResult<Value> {
        let mut values = Vec::with_capacity(elements.len());

        for element in elements {
            values.push(self.eval_value(element)?);
        }

        if let Some(first) = values.first() {
            let expected = first.type_name();
            for value in &values {
                if value.type_name() != expected {
                    return Err(RuntimeError::MixedArray { expected: expected.to_string(),
                                                          found: value.type_name().to_string(),
                                                          line });
                }
            }
        }

        Ok(Value::Array(values))
    }

    /// Evaluates an index expression. Only arrays can be indexed, only by an
    /// integer, and only inside the bounds `0..length`.
    fn eval_index(&mut self, array: &Expr, index: &Expr, line: usize) -> EvalResult<Value> {
        let array = self.eval_value(array)?;
        let index = self.eval_value(index)?;

        let Value::Array(elements) = array else {
            return Err(RuntimeError::NotIndexable { found: array.type_name().to_string(),
                                                    line });
        };

        let Value::Integer(idx) = index else {
            return Err(RuntimeError::IndexNotInteger { found: index.type_name().to_string(),
                                                       line });
        };

        usize::try_from(idx).ok()
                            .and_then(|i| elements.get(i))
                            .cloned()
                            .ok_or(RuntimeError::IndexOutOfBounds { index: idx,
                                                                    length: elements.len(),
                                                                    line })
    }
}
