#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing expression text.
pub enum TokenizeError {
    /// A character matched no token rule.
    UnrecognizedCharacter {
        /// The character encountered.
        character: char,
        /// The byte position of the character in the input.
        position:  usize,
    },
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => {
                write!(f, "Unrecognized character '{character}' at position {position}.")
            },
        }
    }
}

impl std::error::Error for TokenizeError {}
