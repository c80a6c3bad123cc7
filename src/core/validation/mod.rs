//! Form field validation rules
//!
//! A [`RuleSet`] is the per-view validation the mutation gateway runs
//! before any create or edit reaches the store. Rules operate on the
//! submitted JSON object, not on the typed record, so a form can be
//! rejected before deserialization is ever attempted.

use crate::core::error::ValidationError;
use crate::core::field::FieldFormat;
use serde_json::{Map, Value};

/// One validation rule over the submitted form fields
#[derive(Debug, Clone)]
pub enum Rule {
    /// Field must be present, non-null, and not blank
    Required { field: String },

    /// String field must have at least `min` characters
    MinLength { field: String, min: usize },

    /// String field must be one of the allowed labels
    OneOf { field: String, allowed: Vec<String> },

    /// Field must equal another field (password confirmation shape)
    MatchesField { field: String, other: String },

    /// String field must match a format (email, URL, ...)
    Format { field: String, format: FieldFormat },
}

impl Rule {
    fn check(&self, fields: &Map<String, Value>) -> Result<(), ValidationError> {
        match self {
            Rule::Required { field } => {
                let present = match fields.get(field) {
                    None | Some(Value::Null) => false,
                    Some(Value::String(s)) => !s.trim().is_empty(),
                    Some(_) => true,
                };
                if present {
                    Ok(())
                } else {
                    Err(ValidationError::MissingField {
                        field: field.clone(),
                    })
                }
            }
            Rule::MinLength { field, min } => match fields.get(field).and_then(Value::as_str) {
                // Characters, not bytes, to match the error message
                Some(s) if s.chars().count() < *min => Err(ValidationError::TooShort {
                    field: field.clone(),
                    min: *min,
                }),
                _ => Ok(()),
            },
            Rule::OneOf { field, allowed } => match fields.get(field).and_then(Value::as_str) {
                Some(s) if !allowed.iter().any(|a| a == s) => Err(ValidationError::NotInList {
                    field: field.clone(),
                    allowed: allowed.clone(),
                }),
                _ => Ok(()),
            },
            Rule::MatchesField { field, other } => {
                if fields.get(field) == fields.get(other) {
                    Ok(())
                } else {
                    Err(ValidationError::Mismatch {
                        field: field.clone(),
                        other: other.clone(),
                    })
                }
            }
            Rule::Format { field, format } => match fields.get(field).and_then(Value::as_str) {
                Some(s) if !s.is_empty() && !format.matches(s) => {
                    Err(ValidationError::InvalidFormat {
                        field: field.clone(),
                        expected: format.name(),
                    })
                }
                _ => Ok(()),
            },
        }
    }
}

/// The ordered set of rules for one view's forms
///
/// Rules run in declaration order and the first failure is returned,
/// which keeps the inline form message singular and actionable.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, field: impl Into<String>) -> Self {
        self.rules.push(Rule::Required {
            field: field.into(),
        });
        self
    }

    pub fn min_length(mut self, field: impl Into<String>, min: usize) -> Self {
        self.rules.push(Rule::MinLength {
            field: field.into(),
            min,
        });
        self
    }

    pub fn one_of(
        mut self,
        field: impl Into<String>,
        allowed: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.rules.push(Rule::OneOf {
            field: field.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn matches_field(mut self, field: impl Into<String>, other: impl Into<String>) -> Self {
        self.rules.push(Rule::MatchesField {
            field: field.into(),
            other: other.into(),
        });
        self
    }

    pub fn format(mut self, field: impl Into<String>, format: FieldFormat) -> Self {
        self.rules.push(Rule::Format {
            field: field.into(),
            format,
        });
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule against the submitted fields
    pub fn check(&self, fields: &Map<String, Value>) -> Result<(), ValidationError> {
        for rule in &self.rules {
            rule.check(fields)?;
        }
        Ok(())
    }
}
