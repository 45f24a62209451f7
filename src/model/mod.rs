//! DTOs shared by the WASM client and the server.
//!
//! Shapes mirrored from the bot API (guilds, tickets, accounts, admin) are defined
//! here once so the server can forward them unchanged and the client can render them.

pub mod account;
pub mod admin;
pub mod api;
pub mod developer;
pub mod guild;
pub mod id;
pub mod profile;
pub mod ticket;
pub mod user;
