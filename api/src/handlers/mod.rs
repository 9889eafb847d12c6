//! Request handling support: domain-error-to-HTTP mapping

pub mod error;

pub use error::ApiError;
