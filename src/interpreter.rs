/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, delimiters, and the reserved
/// Hinglish keywords. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source line info.
/// - Resolves reserved words against the keyword table at lex time.
/// - Preserves unrecognized characters as illegal tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST via recursive descent with one token of lookahead. It
/// collects syntax errors into a list instead of stopping at the first one.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Records descriptive errors naming the offending and expected tokens.
/// - Recovers after an error so later independent errors also surface.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against an environment, evaluates expressions
/// and statements, and produces runtime values. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Propagates runtime errors and loop-control signals.
/// - Enforces the loop iteration cap so scripts cannot hang the host.
pub mod evaluator;
/// The environment module stores variables and accumulated output.
///
/// An environment is a stack of scopes, each mapping names to values and
/// buffering the text printed while it was innermost. Blocks and loop bodies
/// get child scopes; popping a scope flushes its output to the parent.
///
/// # Responsibilities
/// - Declaration, nearest-scope assignment, and outward lookup of names.
/// - Scope lifecycle for blocks and loop bodies.
/// - Ordered accumulation of printed output.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum with all value variants a script expression can
/// produce, their type tags, display renderings, and truthiness coercion.
pub mod value;
