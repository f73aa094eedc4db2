//! Validation of request payloads into matched fields.

pub mod rules;
mod validation;
pub use validation::{FieldError, FieldKind, Format, RequestValidator, ValidatedFields, ValidationRule};
