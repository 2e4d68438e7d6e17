//! Per-field answer validation
//!
//! A single pure check: field definition plus collected answer in, first
//! failing message out. Validation results are data for the surface to
//! render; nothing here ever faults.

use std::sync::LazyLock;
use regex::Regex;
use crate::storage::models::{AnswerValue, FieldType, FormField};

/// General `local@domain.tld` shape
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex"));

/// International digits shape, applied after separator stripping
static PHONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone shape regex"));

/// Validate one answer against its field definition.
///
/// Checks run in a fixed order and the first failure wins:
/// required, then the field's own constraints (length and pattern for
/// text, range for numbers), then the email/phone shape checks. A
/// missing or empty answer passes everything except `required`.
pub fn validate_field(field: &FormField, value: Option<&AnswerValue>) -> Option<String> {
    let is_empty = value.is_none_or(AnswerValue::is_empty);

    if field.required && is_empty {
        return Some("This field is required".to_string());
    }
    if is_empty {
        return None;
    }
    let Some(value) = value else {
        return None;
    };

    if let Some(rules) = &field.validation {
        if let AnswerValue::Text(text) = value {
            if let Some(min_length) = rules.min_length {
                if text.chars().count() < min_length {
                    return Some(format!("Minimum length is {min_length} characters"));
                }
            }
            if let Some(max_length) = rules.max_length {
                if text.chars().count() > max_length {
                    return Some(format!("Maximum length is {max_length} characters"));
                }
            }
            if let Some(pattern) = &rules.pattern {
                // An uncompilable user pattern is skipped, not surfaced
                if let Ok(re) = Regex::new(pattern) {
                    if !re.is_match(text) {
                        return Some("Invalid format".to_string());
                    }
                }
            }
        }

        if let AnswerValue::Number(number) = value {
            if let Some(min) = rules.min {
                if *number < min {
                    return Some(format!("Minimum value is {min}"));
                }
            }
            if let Some(max) = rules.max {
                if *number > max {
                    return Some(format!("Maximum value is {max}"));
                }
            }
        }
    }

    // Shape checks come after any custom constraints
    if let AnswerValue::Text(text) = value {
        match field.field_type {
            FieldType::Email => {
                if !EMAIL_SHAPE.is_match(text) {
                    return Some("Please enter a valid email address".to_string());
                }
            }
            FieldType::Phone => {
                let stripped: String = text
                    .chars()
                    .filter(|&c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
                    .collect();
                if !PHONE_SHAPE.is_match(&stripped) {
                    return Some("Please enter a valid phone number".to_string());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::ValidationRules;

    fn field(field_type: FieldType) -> FormField {
        FormField {
            id: "f1".to_string(),
            field_type,
            label: "Field".to_string(),
            placeholder: None,
            required: false,
            help_text: None,
            options: Vec::new(),
            validation: None,
            step: None,
        }
    }

    fn text(value: &str) -> AnswerValue {
        AnswerValue::Text(value.to_string())
    }

    #[test]
    fn test_required_empty() {
        let mut f = field(FieldType::Text);
        f.required = true;

        assert_eq!(
            validate_field(&f, None).as_deref(),
            Some("This field is required")
        );
        assert_eq!(
            validate_field(&f, Some(&text(""))).as_deref(),
            Some("This field is required")
        );
        assert!(validate_field(&f, Some(&text("x"))).is_none());
    }

    #[test]
    fn test_required_empty_choice_list() {
        let mut f = field(FieldType::Checkbox);
        f.required = true;

        let none_picked = AnswerValue::Choices(Vec::new());
        assert_eq!(
            validate_field(&f, Some(&none_picked)).as_deref(),
            Some("This field is required")
        );

        let picked = AnswerValue::Choices(vec!["a".to_string()]);
        assert!(validate_field(&f, Some(&picked)).is_none());
    }

    #[test]
    fn test_optional_empty_passes_everything() {
        let mut f = field(FieldType::Email);
        f.validation = Some(ValidationRules {
            min_length: Some(5),
            ..Default::default()
        });

        assert!(validate_field(&f, None).is_none());
        assert!(validate_field(&f, Some(&text(""))).is_none());
    }

    #[test]
    fn test_min_length() {
        let mut f = field(FieldType::Textarea);
        f.validation = Some(ValidationRules {
            min_length: Some(10),
            ..Default::default()
        });

        assert_eq!(
            validate_field(&f, Some(&text("short"))).as_deref(),
            Some("Minimum length is 10 characters")
        );
        assert!(validate_field(&f, Some(&text("long enough text"))).is_none());
    }

    #[test]
    fn test_max_length() {
        let mut f = field(FieldType::Text);
        f.validation = Some(ValidationRules {
            max_length: Some(3),
            ..Default::default()
        });

        assert_eq!(
            validate_field(&f, Some(&text("abcd"))).as_deref(),
            Some("Maximum length is 3 characters")
        );
        assert!(validate_field(&f, Some(&text("abc"))).is_none());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut f = field(FieldType::Text);
        f.validation = Some(ValidationRules {
            max_length: Some(4),
            ..Default::default()
        });

        // Four characters, more than four bytes
        assert!(validate_field(&f, Some(&text("日本語絵"))).is_none());
    }

    #[test]
    fn test_pattern() {
        let mut f = field(FieldType::Text);
        f.validation = Some(ValidationRules {
            pattern: Some("^[0-9]{4}$".to_string()),
            ..Default::default()
        });

        assert_eq!(
            validate_field(&f, Some(&text("12a4"))).as_deref(),
            Some("Invalid format")
        );
        assert!(validate_field(&f, Some(&text("1234"))).is_none());
    }

    #[test]
    fn test_uncompilable_pattern_is_skipped() {
        let mut f = field(FieldType::Text);
        f.validation = Some(ValidationRules {
            pattern: Some("([unclosed".to_string()),
            ..Default::default()
        });

        assert!(validate_field(&f, Some(&text("anything"))).is_none());
    }

    #[test]
    fn test_number_range() {
        let mut f = field(FieldType::Number);
        f.validation = Some(ValidationRules {
            min: Some(5.0),
            max: Some(10.0),
            ..Default::default()
        });

        assert_eq!(
            validate_field(&f, Some(&AnswerValue::Number(12.0))).as_deref(),
            Some("Maximum value is 10")
        );
        assert_eq!(
            validate_field(&f, Some(&AnswerValue::Number(2.0))).as_deref(),
            Some("Minimum value is 5")
        );
        assert!(validate_field(&f, Some(&AnswerValue::Number(7.0))).is_none());
    }

    #[test]
    fn test_email_shape() {
        let f = field(FieldType::Email);

        assert!(validate_field(&f, Some(&text("a@b.com"))).is_none());
        assert_eq!(
            validate_field(&f, Some(&text("not-an-email"))).as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            validate_field(&f, Some(&text("a@b"))).as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            validate_field(&f, Some(&text("a b@c.com"))).as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_phone_shape() {
        let f = field(FieldType::Phone);

        assert!(validate_field(&f, Some(&text("+14155552671"))).is_none());
        // Separators are stripped before the shape check
        assert!(validate_field(&f, Some(&text("+1 (415) 555-2671"))).is_none());
        assert_eq!(
            validate_field(&f, Some(&text("0123456"))).as_deref(),
            Some("Please enter a valid phone number")
        );
        assert_eq!(
            validate_field(&f, Some(&text("call me"))).as_deref(),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn test_required_short_circuits() {
        let mut f = field(FieldType::Email);
        f.required = true;
        f.validation = Some(ValidationRules {
            min_length: Some(100),
            ..Default::default()
        });

        // Only the required message surfaces for an empty answer
        assert_eq!(
            validate_field(&f, Some(&text(""))).as_deref(),
            Some("This field is required")
        );
    }

    #[test]
    fn test_pattern_runs_before_shape_check() {
        let mut f = field(FieldType::Email);
        f.validation = Some(ValidationRules {
            pattern: Some("^[0-9]+$".to_string()),
            ..Default::default()
        });

        // Both the pattern and the email shape reject this value; the
        // pattern message wins
        assert_eq!(
            validate_field(&f, Some(&text("nope"))).as_deref(),
            Some("Invalid format")
        );
    }

    #[test]
    fn test_first_failure_only() {
        let mut f = field(FieldType::Text);
        f.validation = Some(ValidationRules {
            min_length: Some(10),
            pattern: Some("^[0-9]+$".to_string()),
            ..Default::default()
        });

        assert_eq!(
            validate_field(&f, Some(&text("abc"))).as_deref(),
            Some("Minimum length is 10 characters")
        );
    }
}
