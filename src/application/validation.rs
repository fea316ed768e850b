use crate::application::error::{ApplicationError, ApplicationResult};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    Required,
    MaxSize { max: usize },
    Min { min: i64 },
    Range { min: i64, max: i64 },
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("is required"),
            Self::MaxSize { max } => write!(f, "must be at most {max} characters"),
            Self::Min { min } => write!(f, "must be at least {min}"),
            Self::Range { min, max } => write!(f, "must be between {min} and {max}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    #[serde(flatten)]
    pub rule: Rule,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.rule)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn single(field: &'static str, rule: Rule) -> Self {
        Self(vec![FieldViolation { field, rule }])
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|v| v.field).collect()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, violation) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Collects rule violations for one input form.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, Rule::Required);
        }
        self
    }

    /// Length is counted in characters, not bytes.
    pub fn max_size(&mut self, field: &'static str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.push(field, Rule::MaxSize { max });
        }
        self
    }

    pub fn min(&mut self, field: &'static str, value: i64, min: i64) -> &mut Self {
        if value < min {
            self.push(field, Rule::Min { min });
        }
        self
    }

    pub fn range(&mut self, field: &'static str, value: i64, min: i64, max: i64) -> &mut Self {
        if value < min || value > max {
            self.push(field, Rule::Range { min, max });
        }
        self
    }

    pub fn finish(self) -> ApplicationResult<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::Validation(Violations(self.violations)))
        }
    }

    fn push(&mut self, field: &'static str, rule: Rule) {
        self.violations.push(FieldViolation { field, rule });
    }
}

/// Converts a failed domain constructor into a single-field violation.
pub fn field<T, E>(name: &'static str, rule: Rule, result: Result<T, E>) -> ApplicationResult<T> {
    result.map_err(|_| ApplicationError::invalid_field(name, rule))
}

/// Implemented by every command or query that carries client input.
pub trait Validate {
    fn validate(&self) -> ApplicationResult<()>;
}
