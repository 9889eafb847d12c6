//! External identity provider clients

pub mod google;
