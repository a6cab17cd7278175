use std::iter::Peekable;

use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::expect_token},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements, each optionally followed by
/// a `;`. Parsing continues until the closing `}` token is consumed.
///
/// Grammar: `block := "{" (statement ";"?)* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The parsed [`Block`] carrying the opening brace's line number.
///
/// # Errors
/// Returns a `ParseError` if the opening brace is missing, a statement fails
/// to parse, or the input ends before the closing brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::LBrace)?;

    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => {
                statements.push(parse_statement(tokens)?);

                if let Some((Token::Semicolon, _)) = tokens.peek() {
                    tokens.next();
                }
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    Ok(Block { statements, line })
}
