//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for the tables the dashboard owns and return domain
//! models from `server::model`, keeping entity types out of the service layer.

pub mod developer;
pub mod user;

#[cfg(test)]
mod test;
