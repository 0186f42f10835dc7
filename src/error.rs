/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing an
/// expression: invalid factors, unmatched parentheses, and trailing input
/// left over after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types that can be raised while computing a result,
/// such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Represents any error produced while evaluating an expression.
///
/// Because expressions are evaluated during parsing, a single call can fail
/// either way; this type is what the public API returns.
///
/// # Example
/// ```
/// use exprcalc::{error::EvalError, evaluate};
///
/// let error = evaluate("(1 + 2").unwrap_err();
/// assert!(matches!(error, EvalError::Parse(_)));
///
/// let error = evaluate("1 / 0").unwrap_err();
/// assert!(matches!(error, EvalError::Runtime(_)));
/// ```
pub enum EvalError {
    /// The input could not be parsed.
    Parse(ParseError),
    /// The input parsed, but its value could not be computed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
