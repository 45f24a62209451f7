//! Business logic layer.
//!
//! Services sit between controllers and repositories. `bot_api` is the typed client for
//! the external bot API that guild, ticket, account, and admin endpoints forward to.

pub mod auth;
pub mod bot_api;
pub mod developer;
pub mod owner_code;
pub mod profile;
pub mod ticket;
