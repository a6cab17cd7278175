use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language, including the
/// reserved Hinglish keywords.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"bhai"`. The quotes are stripped and
    /// no escape sequences are processed; a backslash is a literal character.
    #[regex(r#""[^"\n]*""#, trim_quotes)]
    Str(String),
    /// Boolean literal tokens: `sach` (true) or `jhuth` (false).
    #[token("sach", parse_bool)]
    #[token("jhuth", parse_bool)]
    Bool(bool),
    /// `bhai_sun` — declares a variable.
    #[token("bhai_sun")]
    Let,
    /// `bol_bhai` — prints a value.
    #[token("bol_bhai")]
    Print,
    /// `suna_bhai` — reads a line from standard input.
    #[token("suna_bhai")]
    Input,
    /// `agar` — if.
    #[token("agar")]
    If,
    /// `nahi_to` — else.
    #[token("nahi_to")]
    Else,
    /// `nahi_to_agar` — else-if.
    #[token("nahi_to_agar")]
    ElseIf,
    /// `jaha_tak` — while.
    #[token("jaha_tak")]
    While,
    /// `chal_bhai` — for.
    #[token("chal_bhai")]
    For,
    /// `bas_kar` — break.
    #[token("bas_kar")]
    Break,
    /// `aage_badh` — continue.
    #[token("aage_badh")]
    Continue,
    /// Identifier tokens; variable names such as `x` or `total`. Reserved
    /// words never reach this variant because keyword tokens win the match.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// Source text the lexer does not recognize. Never produced by the
    /// derived matcher itself; [`lex`] maps match failures to this variant so
    /// scanning always runs to the end of the input.
    Illegal(String),
    /// Line breaks; counted for error reporting and skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
    /// Tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Tokenizes a complete source string.
///
/// Drives the derived lexer to the end of the input and pairs every token
/// with the line it was found on. Unrecognized characters are preserved as
/// [`Token::Illegal`] instead of aborting the scan, so the parser can report
/// them in context.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// All tokens with their line numbers, in source order.
///
/// # Example
/// ```
/// use brolang::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("bhai_sun x = 5;");
///
/// assert_eq!(tokens[0].0, Token::Let);
/// assert_eq!(tokens[1].0, Token::Identifier("x".to_string()));
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => tokens.push((Token::Illegal(lexer.slice().to_string()), lexer.extras.line)),
        }
    }

    tokens
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the digit run does not fit in an `i64`.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Strips the surrounding quotes from a string literal slice.
fn trim_quotes(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
/// Parses a boolean literal from the current token slice (`sach` or `jhuth`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"sach"`.
/// - `Some(false)` if the slice is `"jhuth"`.
/// - `None` otherwise.
fn parse_bool(lex: &mut logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "sach" => Some(true),
        "jhuth" => Some(false),
        _ => None,
    }
}
