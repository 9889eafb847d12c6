//! Database layer: connection pool and MySQL repository implementations

pub mod connection;
pub mod mysql;
