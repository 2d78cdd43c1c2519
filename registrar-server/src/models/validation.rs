//! Validation error types

use std::fmt;

/// Validation error for submitted form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty (or whitespace only) when it shouldn't be
    Empty { field: &'static str },

    /// Field must parse as an integer
    NotNumeric { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::NotNumeric { field } => write!(f, "{} must be numeric", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim a submitted value, rejecting it if nothing is left.
pub fn require(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

/// Parse an already-trimmed value as an integer.
pub fn parse_integer(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    value
        .parse::<i64>()
        .map_err(|_| ValidationError::NotNumeric { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::NotNumeric { field: "year" };
        assert_eq!(err.to_string(), "year must be numeric");

        let err = ValidationError::Empty { field: "first name" };
        assert_eq!(err.to_string(), "first name cannot be empty");
    }

    #[test]
    fn require_trims() {
        assert_eq!(require("name", "  Physics ").unwrap(), "Physics");
        assert_eq!(
            require("name", " \t ").unwrap_err(),
            ValidationError::Empty { field: "name" }
        );
    }

    #[test]
    fn parse_integer_accepts_signs() {
        assert_eq!(parse_integer("year", "2024").unwrap(), 2024);
        assert_eq!(parse_integer("year", "-3").unwrap(), -3);
        assert!(parse_integer("year", "twenty").is_err());
        assert!(parse_integer("year", "20.5").is_err());
    }
}
