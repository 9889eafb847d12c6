//! Authentication routes: signup, login and federated login via Google

pub mod google;
pub mod login;
pub mod signup;
