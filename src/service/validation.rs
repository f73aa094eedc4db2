//! Request validation from per-field rules.

use crate::error::AppError;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// `http`/`https` followed by a host; no whitespace anywhere.
const URL_PATTERN: &str = r"^https?://[^\s/$.?#][^\s]*$";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    String,
    Integer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Url,
}

#[derive(Clone, Debug, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub kind: FieldKind,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub minimum: Option<i64>,
    pub format: Option<Format>,
}

impl ValidationRule {
    /// Same checks, but the field may be omitted (partial update).
    pub fn optional(&self) -> Self {
        ValidationRule {
            required: false,
            ..self.clone()
        }
    }
}

/// One failed field, in the `{ value, msg, param, location }` shape clients expect.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: String,
    pub param: String,
    pub location: &'static str,
}

impl FieldError {
    pub fn new(param: &str, value: Option<Value>, msg: impl Into<String>) -> Self {
        FieldError {
            value,
            msg: msg.into(),
            param: param.to_string(),
            location: "body",
        }
    }
}

/// Fields that passed validation, sanitized. Fields without a rule never appear here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidatedFields(Map<String, Value>);

impl ValidatedFields {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds a server-side field (e.g. the owning `user_id`).
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn into_model<T: DeserializeOwned>(self) -> Result<T, AppError> {
        serde_json::from_value(Value::Object(self.0)).map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate body against per-field rules. Every failing field is reported.
    /// On success returns the matched, sanitized fields.
    pub fn validate(
        body: &Map<String, Value>,
        rules: &[(&'static str, ValidationRule)],
    ) -> Result<ValidatedFields, AppError> {
        let mut matched = Map::new();
        let mut errors = Vec::new();
        for (field, rule) in rules {
            let value = match body.get(*field) {
                None | Some(Value::Null) => {
                    if rule.required {
                        errors.push(FieldError::new(field, None, format!("{} is required", field)));
                    }
                    continue;
                }
                Some(v) => sanitize(v),
            };
            match validate_field(field, &value, rule) {
                Ok(()) => {
                    matched.insert(field.to_string(), value);
                }
                Err(msg) => errors.push(FieldError::new(field, Some(value), msg)),
            }
        }
        if errors.is_empty() {
            Ok(ValidatedFields(matched))
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

fn sanitize(v: &Value) -> Value {
    match v {
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other.clone(),
    }
}

fn validate_field(col: &str, v: &Value, rule: &ValidationRule) -> Result<(), String> {
    match rule.kind {
        FieldKind::String => {
            let s = v.as_str().ok_or_else(|| format!("{} must be a string", col))?;
            validate_str(col, s, rule)
        }
        FieldKind::Integer => {
            let n = v.as_i64().ok_or_else(|| format!("{} must be an integer", col))?;
            if let Some(min) = rule.minimum {
                if n < min {
                    return Err(format!("{} must be at least {}", col, min));
                }
            }
            Ok(())
        }
    }
}

fn validate_str(col: &str, s: &str, rule: &ValidationRule) -> Result<(), String> {
    let len = s.chars().count();
    if let Some(min) = rule.min_length {
        if len < min {
            return Err(format!("{} must be at least {} characters", col, min));
        }
    }
    if let Some(max) = rule.max_length {
        if len > max {
            return Err(format!("{} must be at most {} characters", col, max));
        }
    }
    match rule.format {
        Some(Format::Url) => {
            let re = Regex::new(URL_PATTERN).map_err(|_| format!("invalid pattern for {}", col))?;
            if !re.is_match(s) {
                return Err(format!("{} must be a valid URL", col));
            }
        }
        None => {}
    }
    Ok(())
}
