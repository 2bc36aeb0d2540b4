pub mod accounts;
pub mod admin;
pub mod auth;
pub mod reports;
