/// Core parsing logic for programs and expressions.
///
/// Contains the program-level entry point, expression parsing with the
/// language's greedy left-to-right operator fold, the restricted condition
/// grammar, and the `agar`/`jaha_tak`/`chal_bhai` control forms.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the leading token to parse declarations, assignments, print
/// statements, loop-control statements, and expression statements.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used as the bodies of control
/// constructs.
pub mod block;

/// Utility functions shared by the parser.
///
/// Provides the comma-separated list helper, identifier parsing, and
/// expected-token checks.
pub mod utils;
