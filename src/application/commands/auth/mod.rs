mod bootstrap;
mod login;
mod service;

pub use bootstrap::EnsureAccountCommand;
pub use login::LoginCommand;
pub use service::AuthCommandService;
