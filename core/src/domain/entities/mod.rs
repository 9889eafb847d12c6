//! Domain entities

pub mod history;
pub mod token;
pub mod user;

pub use history::SearchHistory;
pub use token::{Claims, IssuedToken};
pub use user::User;
