//! Course name validation

use serde::Deserialize;

use super::validation::require;
use super::ValidationError;

/// Raw course form (`name` only)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseForm {
    #[serde(default)]
    pub name: String,
}

/// Validated course name (trimmed, non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseName(String);

impl CourseName {
    /// Create a course name from submitted text.
    ///
    /// # Example
    /// ```
    /// use registrar_server::models::CourseName;
    ///
    /// assert_eq!(CourseName::new("  Chemistry ").unwrap().as_str(), "Chemistry");
    /// assert!(CourseName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        require("course name", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CourseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank() {
        let err = CourseName::new("\n").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(
            CourseName::new(" Data Structures ").unwrap().as_str(),
            "Data Structures"
        );
    }
}
