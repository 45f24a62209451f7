//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand for
//! quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let owner = factory::developer_account::DeveloperAccountFactory::new(&db)
//!     .discord_id("123456789")
//!     .role("owner")
//!     .build()
//!     .await?;
//! ```

pub mod developer_account;
pub mod helpers;
pub mod user;

pub use developer_account::{create_developer, create_owner};
pub use user::create_user;
