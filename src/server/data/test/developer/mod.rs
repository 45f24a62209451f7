use crate::{
    model::developer::DeveloperRole,
    server::{
        data::developer::DeveloperRepository, error::AppError,
        model::developer::CreateDeveloperParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod owner_exists;
mod upsert;
