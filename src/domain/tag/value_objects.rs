use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("tag id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visibility flag stored in the `state` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TagState {
    #[default]
    Disabled,
    Enabled,
}

impl TryFrom<i16> for TagState {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::Enabled),
            other => Err(DomainError::Validation(format!(
                "tag state must be 0 or 1, got {other}"
            ))),
        }
    }
}

impl From<TagState> for i16 {
    fn from(value: TagState) -> Self {
        match value {
            TagState::Disabled => 0,
            TagState::Enabled => 1,
        }
    }
}
