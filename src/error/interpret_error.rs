use crate::interpreter::{context::Arity, lexer::Token};

#[derive(Debug, PartialEq)]
/// Represents all errors that can occur while interpreting a token sequence.
pub enum InterpretError {
    /// Found a token where the grammar required a different one.
    UnexpectedToken {
        /// The token encountered.
        token: Token,
    },
    /// Reached the end of the token sequence unexpectedly.
    UnexpectedEndOfInput,
    /// The right operand of a division or modulo evaluated to zero.
    DivisionByZero,
    /// An identifier is bound to neither a function nor a constant.
    UnknownIdentifier {
        /// The name that failed to resolve.
        identifier: String,
    },
    /// A function was applied to the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the function being applied.
        function: String,
        /// How many arguments the function accepts.
        expected: Arity,
        /// How many arguments were supplied.
        found:    usize,
    },
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => write!(f, "Unexpected token: {token:?}."),

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::UnknownIdentifier { identifier } => {
                write!(f, "Unknown identifier '{identifier}'.")
            },

            Self::ArgumentCountMismatch { function,
                                          expected,
                                          found, } => write!(f,
                                                             "Function '{function}' expects {expected} argument(s), but {found} were supplied."),
        }
    }
}

impl std::error::Error for InterpretError {}
