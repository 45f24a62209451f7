//! One-time owner bootstrap codes.
//!
//! When the server starts without any owner account it generates a code and logs a
//! login link containing it. The first user to log in through that link within the TTL
//! becomes an owner. Codes live in memory only and are consumed on use.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for bootstrap codes.
const OWNER_CODE_TTL: Duration = Duration::from_secs(300);

const CODE_LENGTH: usize = 32;

#[derive(Clone)]
struct OwnerCode {
    code: String,
    expires_at: Instant,
}

impl OwnerCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Clone)]
pub struct OwnerCodeService {
    code: Arc<RwLock<Option<OwnerCode>>>,
    ttl: Duration,
}

impl OwnerCodeService {
    /// Creates an empty service with the default five minute code lifetime.
    pub fn new() -> Self {
        Self::with_ttl(OWNER_CODE_TTL)
    }

    /// Creates an empty service with a custom code lifetime.
    ///
    /// # Arguments
    /// - `ttl` - How long a generated code stays valid
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new random code, replacing any previous one.
    ///
    /// # Returns
    /// The code to print in the startup log
    pub async fn generate(&self) -> String {
        let code = Self::generate_random_code();
        *self.code.write().await = Some(OwnerCode::new(code.clone(), self.ttl));
        code
    }

    /// Validates the code and consumes it on success.
    ///
    /// Expired codes are dropped and fail validation. A wrong code leaves the stored
    /// code in place.
    ///
    /// # Arguments
    /// - `input` - Code from the `?code=` login parameter
    ///
    /// # Returns
    /// - `true` - The code matched and has been consumed
    /// - `false` - No code, expired code, or mismatch
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored) if stored.is_expired() => {
                *code = None;
                false
            }
            Some(stored) if stored.code == input => {
                *code = None;
                true
            }
            _ => false,
        }
    }

    /// Whether an unexpired code is waiting to be claimed.
    pub async fn has_valid_code(&self) -> bool {
        self.code
            .read()
            .await
            .as_ref()
            .is_some_and(|stored| !stored.is_expired())
    }

    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }
}

impl Default for OwnerCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test]
    async fn generates_alphanumeric_code() {
        let service = OwnerCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;

        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(service.has_valid_code().await);
    }

    #[tokio::test]
    async fn correct_code_is_consumed() {
        let service = OwnerCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }

    #[tokio::test]
    async fn wrong_code_keeps_stored_code() {
        let service = OwnerCodeService::new();
        service.generate().await;

        assert!(!service.validate_and_consume("wrong").await);
        assert!(service.has_valid_code().await);
    }

    #[tokio::test]
    async fn regenerating_replaces_previous_code() {
        let service = OwnerCodeService::new();
        let first = service.generate().await;
        let second = service.generate().await;

        assert!(!service.validate_and_consume(&first).await);
        assert!(service.validate_and_consume(&second).await);
    }

    #[tokio::test]
    async fn expired_code_fails() {
        let service = OwnerCodeService::with_ttl(Duration::from_millis(20));
        let code = service.generate().await;

        sleep(Duration::from_millis(40)).await;

        assert!(!service.has_valid_code().await);
        assert!(!service.validate_and_consume(&code).await);
    }
}
