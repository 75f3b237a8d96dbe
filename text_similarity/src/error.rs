use std::fmt;

use thiserror::Error;

/// Shorthand for results of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised before a comparison starts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// One of the texts to compare was not provided.
    #[error("invalid input: the {0} text is missing")]
    InvalidInput(Operand),
}

/// Position of a text in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The original text.
    First,
    /// The text compared against the original.
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => f.write_str("first"),
            Operand::Second => f.write_str("second"),
        }
    }
}
