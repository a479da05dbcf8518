use serde::{Deserialize, Serialize};
use validator::Validate;

use super::candidate::CustomerCandidate;
use super::field_errors::FieldErrors;

/// Structured validation result, so callers can surface field-level
/// feedback without treating a bad form as an error path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub field_errors: FieldErrors,
}

impl ValidationReport {
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.valid {
            Ok(())
        } else {
            Err(self.field_errors)
        }
    }
}

/// Checks the structural rules for a candidate: non-empty name and product,
/// phone present and matching the mobile pattern. Each failing field gets
/// exactly one message; for the phone the "required" message takes
/// precedence over the "invalid" one.
pub fn validate_candidate(candidate: &CustomerCandidate) -> ValidationReport {
    let mut field_errors = FieldErrors::new();

    if let Err(errors) = candidate.validate() {
        for (field, errs) in errors.field_errors() {
            let chosen = errs
                .iter()
                .find(|e| e.code == "length")
                .or_else(|| errs.first());
            if let Some(err) = chosen {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                field_errors.insert(field.to_string(), message);
            }
        }
    }

    ValidationReport {
        valid: field_errors.is_empty(),
        field_errors,
    }
}

pub fn is_well_formed(candidate: &CustomerCandidate) -> bool {
    validate_candidate(candidate).valid
}
