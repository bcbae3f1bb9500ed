//! Error types for coordinate parsing and separation math.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from coordinate construction or array broadcasting.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoordError {
    /// Input did not resolve to 2 or 6 valid numeric tokens.
    InvalidInput {
        /// Tokens left after separator replacement and whitespace splitting.
        tokens: Vec<String>,
        /// What was wrong with them.
        reason: String,
    },
    /// Array operands of different lengths were passed to a broadcast call.
    ShapeMismatch { expected: usize, found: usize },
}

impl CoordError {
    pub(crate) fn invalid(tokens: &[String], reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            tokens: tokens.to_vec(),
            reason: reason.into(),
        }
    }
}

impl Display for CoordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { tokens, reason } => {
                write!(f, "invalid input {tokens:?}: {reason}")
            }
            Self::ShapeMismatch { expected, found } => write!(
                f,
                "operand shape mismatch: expected length {expected}, found {found}"
            ),
        }
    }
}

impl Error for CoordError {}
