//! Search history service

mod service;

pub use service::HistoryService;
