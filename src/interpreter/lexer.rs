use logos::Logos;

use crate::error::TokenizeError;

/// Represents a lexical token in an expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
///
/// Tokens carry no source positions. Interpretation errors name the offending
/// token value instead; only lexical errors report a position.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `42` or `1.5e10`.
    ///
    /// The exponent suffix is only recognized directly after a digit, so a
    /// bare `e5` lexes as an identifier. A leading sign is never folded into
    /// the literal; signs are an evaluator concern.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
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
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `|>`
    #[token("|>")]
    Pipe,
    /// Identifier tokens; constant or function names such as `pi` or `min`.
    /// Lowercased at token creation so that name lookups are
    /// case-insensitive.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*|\$[a-zA-Z0-9]*", |lex| lex.slice().to_lowercase())]
    Identifier(String),
    /// Spaces and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Converts a source string into its token sequence.
///
/// Scanning is fail-fast: the first character that matches no token rule
/// aborts tokenization, and no partial token list is returned.
///
/// # Errors
/// Returns [`TokenizeError::UnrecognizedCharacter`] naming the offending
/// character and its byte position.
///
/// # Examples
/// ```
/// use evalix::{Token, tokenize};
///
/// let tokens = tokenize("2 + pi").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(2.0),
///                 Token::Plus,
///                 Token::Identifier("pi".to_string())]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                let position = lexer.span().start;
                let character = lexer.slice()
                                     .chars()
                                     .next()
                                     .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(TokenizeError::UnrecognizedCharacter { character, position });
            },
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
