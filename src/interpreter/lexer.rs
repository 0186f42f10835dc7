use logos::Logos;

/// Represents a lexical token in the input expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
///
/// End of input and unrecognized characters are represented by the lexer
/// iterator itself: it yields `None` once the input is exhausted and an
/// `Err` item for each character that matches no rule below. Unrecognized
/// characters are consumed one at a time, so a malformed input can never
/// stall the stream.
///
/// # Example
/// ```
/// use exprcalc::interpreter::lexer::Token;
/// use logos::Logos;
///
/// let mut lexer = Token::lexer("2 + (3)");
/// assert_eq!(lexer.next(), Some(Ok(Token::Integer(2))));
/// assert_eq!(lexer.next(), Some(Ok(Token::Plus)));
/// assert_eq!(lexer.next(), Some(Ok(Token::LParen)));
/// assert_eq!(lexer.next(), Some(Ok(Token::Integer(3))));
/// assert_eq!(lexer.next(), Some(Ok(Token::RParen)));
/// assert_eq!(lexer.next(), None);
/// ```
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
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
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses an integer literal from the current token slice.
///
/// A digit run that does not fit in an `i64` fails to parse; the lexer then
/// reports the run as an error item instead of a token.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice is not a valid integer.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
