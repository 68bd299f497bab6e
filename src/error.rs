// ⚠️ Lesson Errors
// Everything that can go wrong between a request and a rendered lesson

// ============================================================================
// ERROR TAXONOMY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonError {
    /// The template references a placeholder with no (or an empty) value
    MissingField { placeholder: String },

    /// Region code outside the closed set (US, IN, KE)
    UnrecognizedRegion(String),

    /// Request field failed boundary validation
    InvalidRequest { field: String, message: String },
}

impl LessonError {
    pub fn missing_field(placeholder: impl Into<String>) -> Self {
        LessonError::MissingField {
            placeholder: placeholder.into(),
        }
    }

    pub fn invalid_request(field: impl Into<String>, message: impl Into<String>) -> Self {
        LessonError::InvalidRequest {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True when the caller sent bad input (as opposed to a broken data table)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, LessonError::MissingField { .. })
    }
}

impl std::fmt::Display for LessonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LessonError::MissingField { placeholder } => {
                write!(f, "missing value for template placeholder '{}'", placeholder)
            }
            LessonError::UnrecognizedRegion(code) => {
                write!(f, "unrecognized region '{}' (expected one of US, IN, KE)", code)
            }
            LessonError::InvalidRequest { field, message } => {
                write!(f, "invalid request field '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for LessonError {}

pub type LessonResult<T> = Result<T, LessonError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = LessonError::missing_field("explainer");
        assert_eq!(
            err.to_string(),
            "missing value for template placeholder 'explainer'"
        );

        let err = LessonError::UnrecognizedRegion("FR".to_string());
        assert!(err.to_string().contains("'FR'"));

        let err = LessonError::invalid_request("topic", "must be at least 2 characters");
        assert_eq!(
            err.to_string(),
            "invalid request field 'topic': must be at least 2 characters"
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(!LessonError::missing_field("step1").is_client_error());
        assert!(LessonError::UnrecognizedRegion("XX".to_string()).is_client_error());
        assert!(LessonError::invalid_request("name", "empty").is_client_error());
    }
}
