#[derive(Debug)]
/// Represents all errors that can occur while computing a result.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte offset of the `/` whose divisor was zero.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
