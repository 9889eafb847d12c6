//! MySQL repository implementations backed by SQLx

pub mod history_repository_impl;
pub mod user_repository_impl;

pub use history_repository_impl::MySqlHistoryRepository;
pub use user_repository_impl::MySqlUserRepository;
