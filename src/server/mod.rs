//! Server-side API backend.
//!
//! The backend owns the dashboard's own state (logins, developer accounts, display names
//! and avatars) and forwards guild, ticket, account, and admin calls to the bot API.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control, and DTO validation
//! - **Service Layer** (`service/`) - Business logic and the typed bot API client
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! Supporting modules: `config` (environment configuration), `state` (shared resources),
//! `startup` (database, sessions, HTTP and OAuth clients), and `router` (routes and
//! OpenAPI documentation).
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** checks access through `AuthGuard` and validates the body
//! 3. **Service** runs the operation against the database or the bot API
//! 4. **Controller** converts the result to a DTO and responds
//!
//! Only compiled with the `server` feature.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
