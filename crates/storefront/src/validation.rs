//! Request payload validation.
//!
//! Deserialization already rejects malformed JSON and wrong types; the checks
//! here cover value constraints serde cannot express (non-empty names,
//! positive quantities, rating ranges). Every failing field is reported, not
//! just the first.

use serde::Serialize;

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// JSON path of the offending field, e.g. `items[1].quantity`.
    pub field: String,
    pub message: String,
}

/// The failed constraints of one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// A single-field failure.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Record a failed constraint.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Record `message` against `field` when `ok` is false.
    pub fn check(&mut self, ok: bool, field: impl Into<String>, message: impl Into<String>) {
        if !ok {
            self.add(field, message);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// `Ok(())` if nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one constraint failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// A request payload with value constraints.
pub trait Validate {
    /// Check every constraint.
    ///
    /// # Errors
    ///
    /// Returns all failed constraints.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Whether `value` has visible content.
#[must_use]
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_every_failure() {
        let mut errors = ValidationErrors::new();
        errors.check(true, "username", "must not be empty");
        errors.check(false, "firstName", "must not be empty");
        errors.check(false, "lastName", "must not be empty");

        let fields: Vec<&str> = errors.fields().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["firstName", "lastName"]);
        assert_eq!(errors.to_string(), "2 invalid field(s)");
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_empty_is_ok() {
        assert_eq!(ValidationErrors::new().into_result(), Ok(()));
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("meera"));
        assert!(!not_blank(""));
        assert!(!not_blank("   "));
    }

    #[test]
    fn test_field_error_serializes_flat() {
        let errors = ValidationErrors::single("quantity", "must be at least 1");
        let json = serde_json::to_value(errors.fields()).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!([{ "field": "quantity", "message": "must be at least 1" }])
        );
    }
}
