use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the variables the server expects.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// The rate limiter configuration was rejected (zero period or burst size).
    #[error("Invalid rate limit configuration")]
    InvalidRateLimit,
}
