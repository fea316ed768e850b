use crate::domain::tag::value_objects::{TagId, TagState};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub state: TagState,
    pub created_by: String,
    pub modified_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Tag {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: String,
    pub state: TagState,
    pub created_by: String,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl NewTag {
    pub fn new(name: impl Into<String>, state: TagState, created_by: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state,
            created_by: created_by.into(),
            created_at: None,
            modified_at: None,
        }
    }

    /// Fills audit timestamps the caller left unset.
    pub fn stamp(mut self, now: DateTime<Utc>) -> Self {
        self.created_at.get_or_insert(now);
        self.modified_at.get_or_insert(now);
        self
    }
}

#[derive(Debug, Clone)]
pub struct TagUpdate {
    pub id: TagId,
    pub name: String,
    pub state: TagState,
    pub modified_by: String,
    pub modified_at: Option<DateTime<Utc>>,
}

impl TagUpdate {
    pub fn touch(mut self, now: DateTime<Utc>) -> Self {
        self.modified_at.get_or_insert(now);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    pub name: Option<String>,
    pub state: Option<TagState>,
}
