use logos::{Lexer, Logos};

use crate::{
    error::{EvalError, ParseError, RuntimeError},
    interpreter::lexer::Token,
};

/// Result type used by the evaluator.
///
/// All productions return either a value of type `T` or an [`EvalError`]
/// describing the first failure, parse or runtime.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression while parsing it.
///
/// This struct holds the whole evaluation state: the lexer cursor over the
/// input and the one-token lookahead the productions decide on. Each
/// expression gets its own `Evaluator`, so evaluations are independent and
/// reentrant.
///
/// The grammar is the standard arithmetic one:
///
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/") factor)*
///     factor     := NUMBER | "(" expression ")"
/// ```
///
/// Each production folds its operands into a running `i64` as soon as they
/// are parsed; nothing is materialized beyond the current lookahead.
///
/// # Example
/// ```
/// use exprcalc::interpreter::evaluator::Evaluator;
///
/// let value = Evaluator::new("2 * (3 + (4 - 1))").evaluate().unwrap();
/// assert_eq!(value, 10);
/// ```
pub struct Evaluator<'a> {
    lexer:   Lexer<'a, Token>,
    /// The one-token lookahead. `None` is end of input; `Err` is an
    /// unrecognized character.
    current: Option<Result<Token, ()>>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over `source` with the lookahead primed on the
    /// first token.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Token::lexer(source);
        let current = lexer.next();
        Self { lexer, current }
    }

    /// Parses and evaluates the whole input, returning the final value.
    ///
    /// After the top-level expression completes, the lookahead must be at
    /// end of input. An input like `"3 + 4 ) 5"` therefore fails instead of
    /// silently evaluating to `7` and discarding the rest.
    ///
    /// # Returns
    /// The computed value of the expression.
    ///
    /// # Errors
    /// Any [`ParseError`] or [`RuntimeError`] raised by the productions, or
    /// [`ParseError::UnexpectedTrailingTokens`] if input remains after a
    /// complete expression.
    pub fn evaluate(mut self) -> EvalResult<i64> {
        let value = self.expression()?;

        match self.current {
            None => Ok(value),
            Some(_) => {
                Err(ParseError::UnexpectedTrailingTokens { found:    self.describe_lookahead(),
                                                           position: self.position(), }.into())
            },
        }
    }

    /// Replaces the lookahead with the next token from the lexer.
    fn advance(&mut self) {
        self.current = self.lexer.next();
    }

    /// Byte offset of the lookahead in the input. At end of input this is
    /// the input length.
    fn position(&self) -> usize {
        self.lexer.span().start
    }

    /// Renders the lookahead for an error message.
    fn describe_lookahead(&self) -> String {
        match self.current {
            None => "end of input".to_string(),
            Some(_) => format!("'{}'", self.lexer.slice()),
        }
    }

    /// Evaluates addition and subtraction.
    ///
    /// Handles left-associative chains of `+` and `-`: each right operand
    /// is folded into the running value as soon as its term completes.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    fn expression(&mut self) -> EvalResult<i64> {
        let mut value = self.term()?;
        loop {
            match self.current {
                Some(Ok(Token::Plus)) => {
                    self.advance();
                    value += self.term()?;
                },
                Some(Ok(Token::Minus)) => {
                    self.advance();
                    value -= self.term()?;
                },
                _ => break,
            }
        }
        Ok(value)
    }

    /// Evaluates multiplication and division.
    ///
    /// Handles left-associative chains of `*` and `/`. Division checks the
    /// divisor before applying: a zero divisor raises
    /// [`RuntimeError::DivisionByZero`] carrying the offset of the `/`.
    /// Division truncates toward zero.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    fn term(&mut self) -> EvalResult<i64> {
        let mut value = self.factor()?;
        loop {
            match self.current {
                Some(Ok(Token::Star)) => {
                    self.advance();
                    value *= self.factor()?;
                },
                Some(Ok(Token::Slash)) => {
                    let position = self.position();
                    self.advance();

                    let divisor = self.factor()?;
                    if divisor == 0 {
                        return Err(RuntimeError::DivisionByZero { position }.into());
                    }
                    value /= divisor;
                },
                _ => break,
            }
        }
        Ok(value)
    }

    /// Evaluates a factor, the atomic level of the grammar.
    ///
    /// A factor is either an integer literal or a parenthesized expression.
    /// Any other lookahead, including end of input, an unrecognized
    /// character, a stray operator, or an unmatched `)`, is an
    /// [`ParseError::InvalidFactor`].
    ///
    /// The rule is: `factor := NUMBER | "(" expression ")"`
    fn factor(&mut self) -> EvalResult<i64> {
        match self.current {
            Some(Ok(Token::Integer(value))) => {
                self.advance();
                Ok(value)
            },

            Some(Ok(Token::LParen)) => {
                self.advance();
                let value = self.expression()?;

                match self.current {
                    Some(Ok(Token::RParen)) => {
                        self.advance();
                        Ok(value)
                    },
                    _ => Err(ParseError::ExpectedClosingParen { position: self.position() }.into()),
                }
            },

            _ => {
                Err(ParseError::InvalidFactor { found:    self.describe_lookahead(),
                                                position: self.position(), }.into())
            },
        }
    }
}
