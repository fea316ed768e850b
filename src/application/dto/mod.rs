pub mod articles;
pub mod auth;
pub mod pagination;
pub mod tags;

pub use articles::ArticleDto;
pub use auth::{AuthTokenDto, TokenSubject};
pub use pagination::ListPage;
pub use tags::TagDto;
