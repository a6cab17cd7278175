use std::iter::Peekable;

use crate::{
    ast::{ElseIf, Expr, InfixOperator, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            statement::parse_statement,
            utils::{expect_token, parse_comma_separated},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// This is the entry point for parsing. Statements are parsed one after
/// another until the token stream is exhausted; a trailing `;` after any
/// statement is consumed. Parsing never aborts: when a statement fails, the
/// error is recorded, the stream is advanced past the statement's remains,
/// and parsing continues so later independent errors can also surface.
///
/// The caller must check the error list before trusting the program — when
/// it is non-empty, the program must not be evaluated.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed program together with every syntax error found.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> (Program, Vec<ParseError>)
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while tokens.peek().is_some() {
        match parse_statement(tokens) {
            Ok(statement) => {
                statements.push(statement);

                if let Some((Token::Semicolon, _)) = tokens.peek() {
                    tokens.next();
                }
            },
            Err(error) => {
                errors.push(error);
                synchronize(tokens);
            },
        }
    }

    (Program { statements }, errors)
}

/// Advances past the remains of a statement that failed to parse.
///
/// Tokens are consumed up to and including the next `;` or `}`, which is
/// where the next independent statement can plausibly begin.
fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((token, _)) = tokens.next() {
        if matches!(token, Token::Semicolon | Token::RBrace) {
            break;
        }
    }
}

/// Parses a full expression.
///
/// A primary form is parsed first, then the arithmetic operators
/// `+ - * / %` are folded greedily left-to-right in the order encountered:
/// every operator binds the running left operand to the next primary, with
/// no precedence between them. `2 + 3 * 4` therefore parses as `(2+3)*4`.
/// This fold is a compatibility-preserved quirk of the language; do not
/// introduce conventional precedence here.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_primary(tokens)?;

    while let Some((token, line)) = tokens.peek() {
        let Some(op) = token_to_arithmetic_operator(token) else {
            break;
        };
        let line = *line;
        tokens.next();

        let right = parse_primary(tokens)?;
        left = Expr::Infix { op,
                             left: Box::new(left),
                             right: Box::new(right),
                             line };
    }

    Ok(left)
}

/// Parses the restricted expression grammar used in condition position.
///
/// One expression is parsed, optionally followed by a single comparison
/// operator and one more expression. Comparisons do not chain or nest; this
/// rule is the only place comparison operators are recognized at all.
///
/// Grammar: `simple := expression (cmp_op expression)?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The condition expression, an `Expr::Infix` when a comparison is present.
pub fn parse_simple_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_expression(tokens)?;

    if let Some((token, line)) = tokens.peek()
       && let Some(op) = token_to_comparison_operator(token)
    {
        let line = *line;
        tokens.next();

        let right = parse_expression(tokens)?;
        return Ok(Expr::Infix { op,
                                left: Box::new(left),
                                right: Box::new(right),
                                line });
    }

    Ok(left)
}

/// Parses a primary expression form.
///
/// Primary forms are literals, identifiers (with call and index postfixes),
/// array literals, the `suna_bhai` input primitive, a `bol_bhai(...)` call
/// used as an expression, and the control constructs `agar`, `jaha_tak`, and
/// `chal_bhai` used as expressions. Any other token is a syntax error naming
/// what was found.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = match tokens.peek() {
        Some((Token::Integer(value), line)) => {
            let expr = Expr::IntegerLiteral { value: *value,
                                              line:  *line, };
            tokens.next();
            expr
        },
        Some((Token::Str(value), line)) => {
            let expr = Expr::StringLiteral { value: value.clone(),
                                             line:  *line, };
            tokens.next();
            expr
        },
        Some((Token::Bool(value), line)) => {
            let expr = Expr::BooleanLiteral { value: *value,
                                              line:  *line, };
            tokens.next();
            expr
        },
        Some((Token::Identifier(name), line)) => {
            let name = name.clone();
            let line = *line;
            tokens.next();

            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                Expr::Call { function: name,
                             arguments,
                             line }
            } else {
                Expr::Identifier { name, line }
            }
        },
        Some((Token::Input, line)) => {
            let expr = Expr::Input { line: *line };
            tokens.next();
            expr
        },
        Some((Token::Print, line)) => {
            // `bol_bhai` in expression position is a call; unlike the
            // statement form it takes any number of arguments.
            let line = *line;
            tokens.next();

            expect_token(tokens, &Token::LParen)?;
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            Expr::Call { function: "bol_bhai".to_string(),
                         arguments,
                         line }
        },
        Some((Token::LBracket, line)) => {
            let line = *line;
            tokens.next();
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
            Expr::ArrayLiteral { elements, line }
        },
        Some((Token::If, line)) => {
            let line = *line;
            tokens.next();
            parse_if(tokens, line)?
        },
        Some((Token::While, line)) => {
            let line = *line;
            tokens.next();
            parse_while(tokens, line)?
        },
        Some((Token::For, line)) => {
            let line = *line;
            tokens.next();
            parse_for(tokens, line)?
        },
        Some((Token::Illegal(text), line)) => {
            return Err(ParseError::IllegalToken { token: text.clone(),
                                                  line:  *line, });
        },
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { found:    format!("{tok:?}"),
                                                     expected: "an expression".to_string(),
                                                     line:     *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    parse_index_postfix(tokens, expr)
}

/// Folds `[index]` postfixes onto a parsed primary.
fn parse_index_postfix<'a, I>(tokens: &mut Peekable<I>, mut left: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((Token::LBracket, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let index = parse_expression(tokens)?;
        expect_token(tokens, &Token::RBracket)?;

        left = Expr::Index { array: Box::new(left),
                             index: Box::new(index),
                             line };
    }

    Ok(left)
}

/// Parses an `agar` expression with chained `nahi_to_agar` branches and an
/// optional final `nahi_to`.
///
/// Syntax:
/// ```text
///     agar (<condition>) { <statements> }
///     nahi_to_agar (<condition>) { <statements> }
///     nahi_to { <statements> }
/// ```
/// The `nahi_to_agar` branches are kept in source order and tried first
/// match wins; conditions use the restricted simple-expression grammar.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `agar` keyword.
/// - `line`: Line number of the `agar` token.
///
/// # Returns
/// An `Expr::If` node representing the full conditional.
///
/// # Errors
/// - `UnexpectedToken` if the parentheses or braces are malformed.
/// - Propagates any errors from condition or block parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen)?;
    let condition = parse_simple_expression(tokens)?;
    expect_token(tokens, &Token::RParen)?;

    let consequence = parse_block(tokens)?;

    let mut else_ifs = Vec::new();
    while let Some((Token::ElseIf, _)) = tokens.peek() {
        tokens.next();

        expect_token(tokens, &Token::LParen)?;
        let branch_condition = parse_simple_expression(tokens)?;
        expect_token(tokens, &Token::RParen)?;

        let block = parse_block(tokens)?;
        else_ifs.push(ElseIf { condition: branch_condition,
                               block });
    }

    let alternative = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();
            Some(parse_block(tokens)?)
        },
        _ => None,
    };

    Ok(Expr::If { condition: Box::new(condition),
                  consequence,
                  else_ifs,
                  alternative,
                  line })
}

/// Parses a `jaha_tak` loop.
///
/// Syntax: `jaha_tak (<condition>) { <statements> }`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `jaha_tak` keyword.
/// - `line`: Line number of the `jaha_tak` token.
///
/// # Returns
/// An `Expr::While` node.
pub fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen)?;
    let condition = parse_simple_expression(tokens)?;
    expect_token(tokens, &Token::RParen)?;

    let body = parse_block(tokens)?;

    Ok(Expr::While { condition: Box::new(condition),
                     body,
                     line })
}

/// Parses a `chal_bhai` loop.
///
/// Syntax: `chal_bhai (<init>; <condition>; <update>) { <statements> }`
///
/// All three header clauses are optional; an omitted clause is detected by
/// its delimiter appearing immediately. The init and update clauses are full
/// statements, the condition uses the simple-expression grammar.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `chal_bhai` keyword.
/// - `line`: Line number of the `chal_bhai` token.
///
/// # Returns
/// An `Expr::For` node.
pub fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen)?;

    let init = match tokens.peek() {
        Some((Token::Semicolon, _)) => None,
        _ => Some(Box::new(parse_statement(tokens)?)),
    };
    expect_token(tokens, &Token::Semicolon)?;

    let condition = match tokens.peek() {
        Some((Token::Semicolon, _)) => None,
        _ => Some(Box::new(parse_simple_expression(tokens)?)),
    };
    expect_token(tokens, &Token::Semicolon)?;

    let update = match tokens.peek() {
        Some((Token::RParen, _)) => None,
        _ => Some(Box::new(parse_statement(tokens)?)),
    };
    expect_token(tokens, &Token::RParen)?;

    let body = parse_block(tokens)?;

    Ok(Expr::For { init,
                   condition,
                   update,
                   body,
                   line })
}

/// Maps a token to its arithmetic operator, if it is one.
///
/// Only `+ - * / %` take part in the expression-level operator fold;
/// comparison tokens are handled by [`parse_simple_expression`] alone.
#[must_use]
pub const fn token_to_arithmetic_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Star => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Percent => Some(InfixOperator::Mod),
        _ => None,
    }
}

/// Maps a token to its comparison operator, if it is one.
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        Token::LessEqual => Some(InfixOperator::LessEqual),
        Token::GreaterEqual => Some(InfixOperator::GreaterEqual),
        Token::EqualEqual => Some(InfixOperator::Equal),
        Token::BangEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}
