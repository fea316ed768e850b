// tests/support/mocks/mod.rs
pub mod accounts;
pub mod articles;
pub mod failing;
pub mod security;
pub mod tags;
pub mod time;

pub use accounts::InMemoryAccountRepo;
pub use articles::InMemoryArticleRepo;
pub use failing::FailingRepo;
pub use security::PlainPasswordHasher;
pub use tags::InMemoryTagRepo;
pub use time::{TestClock, fixed_now};
