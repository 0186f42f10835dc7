/// The evaluator module parses tokens and computes the result in one pass.
///
/// The evaluator pulls tokens from the lexer on demand and folds them into
/// a running value as it descends through the grammar. It is both the
/// parser and the execution engine: there is no intermediate tree.
///
/// # Responsibilities
/// - Implements the three recursive-descent productions (expression, term,
///   factor) with standard precedence.
/// - Validates the grammar, reporting errors with byte offsets.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes the input expression.
///
/// The lexer (tokenizer) reads the raw input text and produces a stream of
/// tokens, one at a time, each corresponding to a number, an operator, or a
/// parenthesis. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Skips whitespace between tokens.
/// - Flags unrecognized characters without stalling the stream.
pub mod lexer;
