//! Thin fetch wrappers over the dashboard backend. Every call sends the session
//! cookie and maps non-2xx responses to [`ApiError`](crate::client::model::error::ApiError).

pub mod account;
pub mod admin;
pub mod developer;
pub mod guild;
pub mod helper;
pub mod profile;
pub mod ticket;
pub mod user;
