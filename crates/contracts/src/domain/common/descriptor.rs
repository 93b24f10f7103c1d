use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::shared::metadata::ValidationRules;

/// Resource-specific string fields of a record, keyed by wire name
pub type Fields = BTreeMap<String, String>;

/// Static description of one record collection.
///
/// Everything that differs between customers and items lives here, so the
/// storage, guard and handlers stay generic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceDescriptor {
    /// Collection name, also the REST path segment (e.g. "customers")
    pub collection_name: &'static str,
    /// Singular display name (e.g. "Customer")
    pub element_name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

/// One string field of a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    /// Wire name (e.g. "firstName")
    pub name: &'static str,
    /// Human label used in generated messages
    pub label: &'static str,
    /// Whether update requests may overwrite this field
    pub mutable: bool,
    pub validation: ValidationRules,
}

impl ResourceDescriptor {
    pub fn invalid_id_message(&self) -> String {
        format!("{} is invalid", self.element_name)
    }

    pub fn not_found_message(&self) -> String {
        format!(
            "No {} with that identifier has been found",
            self.element_name.to_lowercase()
        )
    }

    /// Build the field set of a new record: every declared field, defaulted to
    /// an empty string and overlaid with the payload values.
    pub fn fields_for_insert(&self, payload: &Map<String, Value>) -> Result<Fields, String> {
        let mut fields = Fields::new();
        for field in self.fields {
            let value = match payload.get(field.name) {
                Some(raw) => coerce(field, raw)?,
                None => String::new(),
            };
            fields.insert(field.name.to_string(), value);
        }
        Ok(fields)
    }

    /// Overwrite the mutable fields present in `payload`. Anything else in the
    /// payload is ignored.
    pub fn apply_update(&self, fields: &mut Fields, payload: &Map<String, Value>) -> Result<(), String> {
        for field in self.fields.iter().filter(|f| f.mutable) {
            if let Some(raw) = payload.get(field.name) {
                fields.insert(field.name.to_string(), coerce(field, raw)?);
            }
        }
        Ok(())
    }

    /// Check the record's fields against the declared rules
    pub fn validate(&self, fields: &Fields) -> Result<(), String> {
        for field in self.fields {
            let value = fields.get(field.name).map(String::as_str).unwrap_or("");
            field.validation.validate_string(value, field.label)?;
        }
        Ok(())
    }
}

fn coerce(field: &FieldDescriptor, raw: &Value) -> Result<String, String> {
    match raw {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Null => Ok(String::new()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(_) | Value::Object(_) => Err(format!("{} must be a string", field.label)),
    }
}
