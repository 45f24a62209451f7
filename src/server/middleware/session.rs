//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but only exposes the keys for its own
//! concern:
//! - `AuthSession` - The logged in user's Discord ID
//! - `CsrfSession` - CSRF token for the OAuth flow
//! - `OAuthFlowSession` - Owner bootstrap flag carried across the Discord redirect

use tower_sessions::Session;

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_SET_OWNER: &str = "auth:set_owner";

/// Login state: which Discord user this browser session belongs to.
pub struct AuthSession<'a> {
    /// The wrapped tower-sessions session.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Wraps a session for reading and writing the logged in user.
    ///
    /// # Arguments
    /// - `session` - Session extracted from the request
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's Discord ID after a successful login.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user who just completed OAuth
    ///
    /// # Returns
    /// - `Ok(())` - Stored
    /// - `Err(AppError::SessionErr(_))` - The session store rejected the write
    pub async fn set_user_id(&self, user_id: u64) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the logged in user's Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<u64>, AppError> {
        let Some(user_id_str) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        Ok(Some(parse_u64_from_string(user_id_str)?))
    }

    /// Clears all data from the session, used on logout.
    ///
    /// Removes the user ID along with any CSRF token or owner flag left over from an
    /// unfinished login.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF token issued when a login starts and checked when Discord redirects back.
pub struct CsrfSession<'a> {
    /// The wrapped tower-sessions session.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    /// Wraps a session for CSRF token storage.
    ///
    /// # Arguments
    /// - `session` - Session extracted from the request
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the CSRF token generated for the Discord authorize URL.
    ///
    /// # Arguments
    /// - `token` - Secret state value sent to Discord
    ///
    /// # Returns
    /// - `Ok(())` - Stored, replacing any earlier token
    /// - `Err(AppError::SessionErr(_))` - The session store rejected the write
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token so each token validates at most once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - A login was started from this session
    /// - `Ok(None)` - No login in progress, or the token was already used
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// State that must survive the round trip through Discord's authorize page.
pub struct OAuthFlowSession<'a> {
    /// The wrapped tower-sessions session.
    session: &'a Session,
}

impl<'a> OAuthFlowSession<'a> {
    /// Wraps a session for OAuth flow flags.
    ///
    /// # Arguments
    /// - `session` - Session extracted from the request
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks that a valid owner bootstrap code was presented at login.
    ///
    /// The callback reads the flag and grants owner access to whoever completes the
    /// login.
    ///
    /// # Arguments
    /// - `set_owner` - Whether the callback should create an owner account
    ///
    /// # Returns
    /// - `Ok(())` - Flag stored
    /// - `Err(AppError::SessionErr(_))` - The session store rejected the write
    pub async fn set_owner_flag(&self, set_owner: bool) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_SET_OWNER, set_owner)
            .await?;
        Ok(())
    }

    /// Retrieves and removes the owner flag, defaulting to `false`.
    ///
    /// # Returns
    /// - `Ok(true)` - The login started with a valid bootstrap code
    /// - `Ok(false)` - Ordinary login, or the flag was already consumed
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_owner_flag(&self) -> Result<bool, AppError> {
        let set_owner = self
            .session
            .remove(SESSION_AUTH_SET_OWNER)
            .await?
            .unwrap_or(false);
        Ok(set_owner)
    }
}
