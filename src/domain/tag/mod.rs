pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTag, Tag, TagFilter, TagUpdate};
pub use repository::TagRepository;
pub use value_objects::{TagId, TagState};
