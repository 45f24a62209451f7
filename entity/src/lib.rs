//! SeaORM entities for the dashboard's own tables.
//!
//! Guild, ticket, and account data belong to the bot API and never touch this
//! database; only dashboard logins and developer access are stored here.

pub mod prelude;

pub mod developer_account;
pub mod user;
