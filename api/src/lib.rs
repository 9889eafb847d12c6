//! HTTP API layer for the LexVault backend
//!
//! Routes, DTOs and middleware over the core services. The app factory in
//! [`app`] is generic over the repository implementations so integration
//! tests can run the full HTTP surface against in-memory mocks.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
