mod list;
mod service;

pub use list::ListTagsQuery;
pub use service::TagQueryService;
