use crate::server::error::{internal::InternalError, AppError};

/// Parses a Discord ID stored as a String.
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed ID
/// - `Err(AppError::InternalErr(ParseStringId))` - The stored value is not a valid `u64`
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|source| InternalError::ParseStringId { value, source })?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflake() {
        let id = parse_u64_from_string("123456789012345678".to_string()).unwrap();
        assert_eq!(id, 123456789012345678);
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(parse_u64_from_string("abc".to_string()).is_err());
    }
}
