use crate::server::{data::user::UserRepository, error::AppError, model::user::UpsertUserParam};
use test_utils::{builder::TestBuilder, factory};

mod find_by_discord_id;
mod update_avatar;
mod update_display_name;
mod upsert;
