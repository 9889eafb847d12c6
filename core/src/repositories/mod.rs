//! Repository traits abstracting the persistence layer
//!
//! Implementations live in the infrastructure crate; the in-memory mocks
//! here back the unit and integration tests.

pub mod history;
pub mod user;

pub use history::{HistoryRepository, MockHistoryRepository};
pub use user::{MockUserRepository, UserRepository};
