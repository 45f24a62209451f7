use dioxus::prelude::*;

use crate::{client::model::error::ApiError, model::user::UserDto};

/// Shared login state, provided once by [`App`](crate::client::App).
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }

    /// Replaces the signed-in user, e.g. after a profile edit returns the new DTO.
    pub fn set_user(&mut self, user: UserDto) {
        self.inner.set(AuthState::Authenticated(user));
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq)]
pub enum AuthState {
    /// Initial state - haven't checked authentication yet
    Initializing,
    Authenticated(UserDto),
    NotLoggedIn,
    /// Failed to check authentication
    Error(ApiError),
}

impl From<Option<UserDto>> for AuthState {
    fn from(opt: Option<UserDto>) -> Self {
        match opt {
            Some(user) => AuthState::Authenticated(user),
            None => AuthState::NotLoggedIn,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Permission {
    LoggedIn,
    Developer,
    Owner,
}

impl AuthState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// Only authenticated users hold permissions. Owners implicitly have `Developer`.
    pub fn has_permission(&self, permission: Permission) -> bool {
        match self {
            AuthState::Authenticated(user) => match permission {
                Permission::LoggedIn => true,
                Permission::Developer => user.is_developer(),
                Permission::Owner => user.is_owner(),
            },
            _ => false,
        }
    }

    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        permissions.iter().all(|perm| self.has_permission(*perm))
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<u64> {
        self.user().map(|u| u.discord_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::developer::DeveloperRole;

    fn user(role: Option<DeveloperRole>) -> UserDto {
        UserDto {
            discord_id: 1,
            name: "listener".to_string(),
            display_name: None,
            avatar: None,
            role,
        }
    }

    #[test]
    fn logged_out_has_no_permissions() {
        assert!(!AuthState::NotLoggedIn.has_permission(Permission::LoggedIn));
        assert!(!AuthState::Initializing.has_permission(Permission::LoggedIn));
    }

    #[test]
    fn plain_user_is_not_developer() {
        let state = AuthState::Authenticated(user(None));

        assert!(state.has_permission(Permission::LoggedIn));
        assert!(!state.has_permission(Permission::Developer));
        assert!(!state.has_permission(Permission::Owner));
    }

    #[test]
    fn owner_has_every_permission() {
        let state = AuthState::Authenticated(user(Some(DeveloperRole::Owner)));

        assert!(state.has_all_permissions(&[
            Permission::LoggedIn,
            Permission::Developer,
            Permission::Owner
        ]));
    }

    #[test]
    fn developer_is_not_owner() {
        let state = AuthState::Authenticated(user(Some(DeveloperRole::Developer)));

        assert!(state.has_permission(Permission::Developer));
        assert!(!state.has_permission(Permission::Owner));
    }
}
