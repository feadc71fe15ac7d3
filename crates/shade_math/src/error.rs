//! Error types for the vector library

use thiserror::Error;

/// Errors raised while reading a vector from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVectorError {
    /// The input did not split into exactly as many parts as the vector has components
    #[error("expected {expected} components, found {found}")]
    WrongArity { expected: usize, found: usize },

    /// A part could not be parsed as the element type
    #[error("component {index} is not a valid value: {text:?}")]
    InvalidComponent { index: usize, text: String },
}

/// Vector library errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Component index outside `[0, len)`
    #[error("index {index} out of range for a vector of {len} components")]
    IndexOutOfRange { index: usize, len: usize },

    /// Text could not be parsed into a vector.
    ///
    /// Parsing itself returns [`ParseVectorError`]; this variant lets code
    /// returning [`Result`] apply `?` to parse results.
    #[error("failed to parse vector: {0}")]
    Parse(#[from] ParseVectorError),
}

/// Result type for vector operations
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{int2, Int2};

    fn parse_offset(text: &str) -> Result<Int2> {
        let offset = Int2::parse_with(text, ",")?;
        Ok(offset * 2)
    }

    #[test]
    fn test_error_messages() {
        let err = MathError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(err.to_string(), "index 4 out of range for a vector of 3 components");

        let err: MathError = ParseVectorError::WrongArity { expected: 2, found: 3 }.into();
        assert_eq!(err.to_string(), "failed to parse vector: expected 2 components, found 3");
    }

    #[test]
    fn test_parse_error_converts_with_question_mark() {
        assert_eq!(parse_offset("3, -4"), Ok(int2(6, -8)));
        assert_eq!(
            parse_offset("3"),
            Err(MathError::Parse(ParseVectorError::WrongArity { expected: 2, found: 1 }))
        );
        assert!(matches!(
            parse_offset("3, x"),
            Err(MathError::Parse(ParseVectorError::InvalidComponent { index: 1, .. }))
        ));
    }
}
