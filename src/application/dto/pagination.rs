use serde::{Deserialize, Serialize};

/// One page of rows plus the number of rows matching the filter overall.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct ListPage<T> {
    pub lists: Vec<T>,
    pub total: u64,
}

impl<T> ListPage<T> {
    pub fn new(lists: Vec<T>, total: u64) -> Self {
        Self { lists, total }
    }
}
