//! HTTP request handlers.
//!
//! Handlers check access with `AuthGuard`, validate request bodies, call a service or the
//! bot API client, and convert results into DTOs. Each module defines an OpenAPI tag.

pub mod account;
pub mod admin;
pub mod auth;
pub mod developer;
pub mod guild;
pub mod profile;
pub mod ticket;
