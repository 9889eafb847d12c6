//! Core business logic for the LexVault backend
//!
//! This crate holds the domain entities, the error taxonomy, the repository
//! traits (with in-memory mocks for tests), and the services: credential and
//! federated authentication, stateless session tokens, per-user search
//! history, and the sliding-window rate limiter. It performs no I/O of its
//! own; persistence and external providers are injected through traits.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{HistoryRepository, UserRepository};
