pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod result_code;
pub mod services;
pub mod validation;

pub use error::ApplicationResult;
pub use result_code::ResultCode;
