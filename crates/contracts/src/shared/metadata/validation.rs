//! Validation rules for metadata fields

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
    /// Message reported instead of the generated one
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            custom_error: None,
        }
    }

    /// Create validation rules for a required field with a fixed message
    pub const fn required(message: &'static str) -> Self {
        Self {
            required: true,
            custom_error: Some(message),
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.is_required() && value.trim().is_empty() {
            return Err(match self.custom_error {
                Some(message) => message.to_string(),
                None => format!("{} cannot be blank", field_label),
            });
        }

        Ok(())
    }
}
