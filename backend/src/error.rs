//! Error types for formatting and output assembly.
//!
//! Formatting itself is total; errors only arise from configuration
//! (unknown zones, malformed date patterns, unreadable config files) and from
//! the retired XML export.

/// Result type for formatter operations
pub type FormatterResult<T> = Result<T, FormatterError>;

/// Error type for formatter operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatterError {
    /// The operation has been removed and always fails.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// Time zone identifier not present in the IANA database.
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    /// Date pattern could not be parsed.
    #[error("Invalid date pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Configuration file missing or malformed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FormatterError {
    /// Create an invalid-pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error reports a removed operation.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let err = FormatterError::UnsupportedOperation("XML serialization");
        assert_eq!(err.to_string(), "Unsupported operation: XML serialization");
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_invalid_pattern_display() {
        let err = FormatterError::invalid_pattern("yyyy-qq", "unknown pattern letter 'q'");
        assert_eq!(
            err.to_string(),
            "Invalid date pattern 'yyyy-qq': unknown pattern letter 'q'"
        );
        assert!(!err.is_unsupported());
    }
}
