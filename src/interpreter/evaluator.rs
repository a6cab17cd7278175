/// Core evaluation logic.
///
/// Contains the main dispatch over AST nodes, the control-flow result type,
/// and statement, block, and conditional evaluation.
pub mod core;

/// Infix operator evaluation.
///
/// Implements the integer arithmetic and comparison operators, including the
/// explicit division-by-zero guard.
pub mod binary;

/// Loop evaluation.
///
/// Executes `jaha_tak` and `chal_bhai` loops, enforcing the fixed iteration
/// cap and handling `bas_kar`/`aage_badh` signals.
pub mod loops;

/// Built-in operations.
///
/// Handles call expressions, the `bol_bhai` print built-in, and the
/// `suna_bhai` input primitive.
pub mod builtins;
