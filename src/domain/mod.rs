pub mod account;
pub mod article;
pub mod errors;
pub mod pagination;
pub mod tag;
