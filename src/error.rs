/// Tokenization errors.
///
/// Defines the error type produced while lexing expression text. Lexical
/// errors pinpoint the first character that matched no token rule, together
/// with its byte position in the input.
pub mod tokenize_error;
/// Interpretation errors.
///
/// Contains all error types that can be raised while parsing and evaluating a
/// token sequence: unexpected or missing tokens, division by zero, unresolved
/// identifiers and argument-count mismatches.
pub mod interpret_error;

pub use interpret_error::InterpretError;
pub use tokenize_error::TokenizeError;
