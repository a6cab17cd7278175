//! # brolang
//!
//! brolang is a tree-walking interpreter for a small imperative scripting
//! language with Hinglish keywords. Source text is scanned into tokens,
//! parsed into an AST by recursive descent, and evaluated against a chained
//! variable-scope environment that also accumulates everything the script
//! prints.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{environment::Environment, lexer::lex, parser::core::parse_program};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement`, and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including source lines.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the environment to provide a complete runtime for
/// source code execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment.
/// - Provides entry points for executing user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// The outcome of executing a piece of source code.
///
/// `output` holds everything the script printed, each rendering followed by
/// a newline. `error` is `None` on success; otherwise it holds either the
/// joined parse errors (in which case nothing was evaluated and `output` is
/// empty) or the rendering of the runtime error that stopped evaluation, in
/// which case `output` still holds whatever was printed before the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteResult {
    /// The accumulated printed output.
    pub output: String,
    /// The failure rendering, when parsing or evaluation failed.
    pub error:  Option<String>,
}

/// Executes source code against a fresh top-level scope.
///
/// This is the main collaborator-facing entry point: lex, parse, and — when
/// no syntax errors were collected — evaluate. Each call uses its own
/// [`Environment`], so concurrent callers never share state.
///
/// # Examples
/// ```
/// use brolang::execute;
///
/// let result = execute("bol_bhai(2 + 3);");
/// assert_eq!(result.output, "5\n");
/// assert!(result.error.is_none());
///
/// // Reading an undefined variable is reported, not defaulted.
/// let result = execute("bol_bhai(kuch_nahi);");
/// assert!(result.error.is_some());
/// ```
#[must_use]
pub fn execute(source: &str) -> ExecuteResult {
    let mut environment = Environment::new();
    execute_with(source, &mut environment)
}

/// Executes source code against a caller-provided environment.
///
/// Useful when the caller wants top-level bindings to survive across
/// executions, the way a REPL does. The environment's accumulated output is
/// drained into the result either way.
///
/// # Examples
/// ```
/// use brolang::{execute_with, interpreter::environment::Environment};
///
/// let mut env = Environment::new();
///
/// let first = execute_with("bhai_sun x = 7;", &mut env);
/// assert!(first.error.is_none());
///
/// let second = execute_with("bol_bhai(x);", &mut env);
/// assert_eq!(second.output, "7\n");
/// ```
pub fn execute_with(source: &str, environment: &mut Environment) -> ExecuteResult {
    let tokens = lex(source);
    let mut iter = tokens.iter().peekable();

    let (program, errors) = parse_program(&mut iter);
    if !errors.is_empty() {
        let joined = errors.iter()
                           .map(ToString::to_string)
                           .collect::<Vec<_>>()
                           .join(" ");

        return ExecuteResult { output: String::new(),
                               error:  Some(joined), };
    }

    match environment.eval_program(&program) {
        Ok(_) => ExecuteResult { output: environment.take_output(),
                                 error:  None, },
        Err(e) => ExecuteResult { output: environment.take_output(),
                                  error:  Some(format!("bhai galati kardi tune {e}")), },
    }
}
