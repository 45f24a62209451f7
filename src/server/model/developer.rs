//! Developer account domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::developer::{DeveloperAccountDto, DeveloperRole},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::parse_u64_from_string,
    },
};

/// A user granted access to the developer console.
#[derive(Debug, Clone, PartialEq)]
pub struct DeveloperAccount {
    pub id: i32,
    pub discord_id: u64,
    pub name: String,
    pub role: DeveloperRole,
    /// Discord ID of the owner who granted access, `None` for bootstrapped owners.
    pub added_by: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl DeveloperAccount {
    pub fn into_dto(self) -> DeveloperAccountDto {
        DeveloperAccountDto {
            discord_id: self.discord_id,
            name: self.name,
            role: self.role,
            added_by: self.added_by,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DeveloperAccount)` - The converted account
    /// - `Err(AppError::InternalErr(_))` - Stored ID or role could not be parsed
    pub fn from_entity(entity: entity::developer_account::Model) -> Result<Self, AppError> {
        let role = entity
            .role
            .parse::<DeveloperRole>()
            .map_err(|_| InternalError::UnknownRole(entity.role.clone()))?;

        Ok(Self {
            id: entity.id,
            discord_id: parse_u64_from_string(entity.discord_id)?,
            name: entity.name,
            role,
            added_by: entity.added_by.map(parse_u64_from_string).transpose()?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for granting developer access.
#[derive(Debug, Clone)]
pub struct CreateDeveloperParam {
    pub discord_id: u64,
    pub name: String,
    pub role: DeveloperRole,
    pub added_by: Option<u64>,
}
