pub mod entity;
pub mod repository;

pub use entity::{Account, NewAccount};
pub use repository::AccountRepository;
