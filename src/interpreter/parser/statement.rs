use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// Dispatch is on the current token:
/// - `bhai_sun` begins a variable declaration,
/// - `bol_bhai` begins a print statement,
/// - `bas_kar` / `aage_badh` are the loop-control statements,
/// - an identifier directly followed by `=` is an assignment,
/// - everything else is parsed as an expression statement.
///
/// Statement separators (`;`) are left in the stream; the surrounding
/// program, block, or loop-header parser consumes them.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Let, line)) => {
            let line = *line;
            tokens.next();
            parse_let(tokens, line)
        },
        Some((Token::Print, line)) => {
            let line = *line;
            tokens.next();
            parse_print(tokens, line)
        },
        Some((Token::Break, line)) => {
            let line = *line;
            tokens.next();
            Ok(Statement::Break { line })
        },
        Some((Token::Continue, line)) => {
            let line = *line;
            tokens.next();
            Ok(Statement::Continue { line })
        },
        Some((Token::Identifier(_), line)) => {
            let line = *line;
            if peek_is_assignment(tokens) {
                parse_assignment(tokens)
            } else {
                let expr = parse_expression(tokens)?;
                Ok(Statement::Expression { expr, line })
            }
        },
        Some((_, line)) => {
            let line = *line;
            let expr = parse_expression(tokens)?;
            Ok(Statement::Expression { expr, line })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Checks whether the current identifier begins an assignment, using one
/// cloned token of lookahead. A call such as `foo(1)` must not match.
fn peek_is_assignment<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    matches!(lookahead.peek(), Some((Token::Equals, _)))
}

/// Parses a variable declaration after its `bhai_sun` keyword.
///
/// A declaration has the form `bhai_sun <identifier> = <expression>`.
fn parse_let<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Equals)?;

    let value = parse_expression(tokens)?;
    Ok(Statement::Let { name, value, line })
}

/// Parses an assignment statement: `<identifier> = <expression>`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;
    let line = expect_token(tokens, &Token::Equals)?;

    let value = parse_expression(tokens)?;
    Ok(Statement::Assign { name, value, line })
}

/// Parses a print statement after its `bol_bhai` keyword.
///
/// A print statement has the form `bol_bhai(<expression>)`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen)?;
    let value = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen)?;

    Ok(Statement::Print { value, line })
}
