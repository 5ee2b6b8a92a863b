//! Input validation for authoring forms and ticket submissions.
//!
//! Empty required text fields are the only user-facing validation failure in
//! the dashboard; the helpers here surface them (and a few size caps) as
//! typed errors instead of letting malformed entities into the stores.

/// Maximum length for single-line fields (titles, usernames, URLs).
pub const MAX_LINE_LEN: usize = 200;

/// Maximum length for free-text fields (descriptions, explanations).
pub const MAX_TEXT_LEN: usize = 2000;

/// Minimum number of answer options a quiz question must offer.
pub const MIN_QUIZ_OPTIONS: usize = 2;

/// Validation errors with field-level messages suitable for form display.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    EmptyField { field: &'static str },

    #[error("{field} is too long (maximum {max} characters)")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("a question needs at least {minimum} answer options")]
    TooFewOptions { minimum: usize },

    #[error("correct answer index {index} is out of range ({options} options)")]
    AnswerIndexOutOfRange { index: usize, options: usize },

    #[error("progress {value} is out of range (0-100)")]
    ProgressOutOfRange { value: u8 },

    #[error("{field} must be positive")]
    NotPositive { field: &'static str },
}

/// Require a strictly positive integer field (levels, point rewards).
pub fn require_positive(field: &'static str, value: u32) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(())
}

/// Require a non-empty (after trimming) single-line field.
pub fn require_line(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require_text(field, value, MAX_LINE_LEN)
}

/// Require a non-empty (after trimming) field with an explicit length cap.
pub fn require_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::FieldTooLong { field, max });
    }
    Ok(())
}

/// Validate an answer-option list and the index claimed to be correct.
pub fn require_answer_in_range(
    options: &[String],
    correct_answer: usize,
) -> Result<(), ValidationError> {
    if options.len() < MIN_QUIZ_OPTIONS {
        return Err(ValidationError::TooFewOptions {
            minimum: MIN_QUIZ_OPTIONS,
        });
    }
    if correct_answer >= options.len() {
        return Err(ValidationError::AnswerIndexOutOfRange {
            index: correct_answer,
            options: options.len(),
        });
    }
    Ok(())
}

/// Validate a 0-100 progress percentage.
pub fn require_progress(value: u8) -> Result<(), ValidationError> {
    if value > 100 {
        return Err(ValidationError::ProgressOutOfRange { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_fields_are_rejected() {
        assert_eq!(
            require_line("title", ""),
            Err(ValidationError::EmptyField { field: "title" })
        );
        assert_eq!(
            require_line("title", "   "),
            Err(ValidationError::EmptyField { field: "title" })
        );
        assert!(require_line("title", "Pricing 101").is_ok());
    }

    #[test]
    fn overlong_fields_are_rejected() {
        let long = "x".repeat(MAX_LINE_LEN + 1);
        assert_eq!(
            require_line("title", &long),
            Err(ValidationError::FieldTooLong {
                field: "title",
                max: MAX_LINE_LEN
            })
        );
    }

    #[test]
    fn answer_index_must_point_at_an_option() {
        let options = vec!["a".to_string(), "b".to_string()];
        assert!(require_answer_in_range(&options, 1).is_ok());
        assert_eq!(
            require_answer_in_range(&options, 2),
            Err(ValidationError::AnswerIndexOutOfRange {
                index: 2,
                options: 2
            })
        );
        assert_eq!(
            require_answer_in_range(&options[..1].to_vec(), 0),
            Err(ValidationError::TooFewOptions { minimum: 2 })
        );
    }
}
