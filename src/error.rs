/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, and illegal
/// characters detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown identifiers, type mismatches, division by zero,
/// out-of-bounds indexing, and runaway loops.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
