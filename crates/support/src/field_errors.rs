//! Rendering helpers over form validation errors.

use serde::{Deserialize, Serialize};

/// One validation failure reported by the form layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Whether any error targets `field` (exact name match).
pub fn has_error_in_field(errors: Option<&[FieldError]>, field: &str) -> bool {
    errors
        .unwrap_or_default()
        .iter()
        .any(|e| e.field == field)
}

/// Messages of every error on `field`, in order, each followed by `". "`.
pub fn field_error_description(errors: Option<&[FieldError]>, field: &str) -> String {
    errors
        .unwrap_or_default()
        .iter()
        .filter(|e| e.field == field)
        .fold(String::new(), |mut out, e| {
            out.push_str(&e.message);
            out.push_str(". ");
            out
        })
}

/// One message per line, each terminated by a newline.
pub fn join_error_lines<S: AsRef<str>>(errors: Option<&[S]>) -> String {
    errors
        .unwrap_or_default()
        .iter()
        .fold(String::new(), |mut out, e| {
            out.push_str(e.as_ref());
            out.push('\n');
            out
        })
}
