//! Field-level validation results shared by entities and stores.

use validator::ValidationErrors;

/// A single violated field rule.
///
/// `field` uses the wire (camelCase) name so it can be reported to clients as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flattens `validator` errors into one violation per failed rule.
///
/// Every violated rule is reported, sorted by field name so the output is
/// stable across runs.
pub fn violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = wire_name(&field).to_string();
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid ({})", field, err.code));
                FieldViolation::new(field.clone(), message)
            })
        })
        .collect();

    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    out
}

/// Struct fields whose wire name differs from the Rust name.
const WIRE_NAMES: &[(&str, &str)] = &[("first_name", "firstName"), ("last_name", "lastName")];

/// Returns the name a field is reported under in JSON bodies.
pub fn wire_name(field: &str) -> &str {
    WIRE_NAMES
        .iter()
        .find(|(name, _)| *name == field)
        .map_or(field, |(_, wire)| *wire)
}
