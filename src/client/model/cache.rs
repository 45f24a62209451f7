use crate::client::model::error::ApiError;

/// State of a polled resource.
///
/// A failed refresh keeps the last good value in `Fetched` and reports the error
/// separately, so `Error` only appears when nothing was ever loaded.
#[derive(Clone, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Applies a fetch result. Errors only replace the cache if there is no data yet.
    ///
    /// # Returns
    /// The error, if the fetch failed, so the caller can surface it in a banner.
    pub fn apply(&mut self, result: Result<T, ApiError>) -> Option<ApiError> {
        match result {
            Ok(data) => {
                *self = Cache::Fetched(data);
                None
            }
            Err(err) => {
                if !matches!(self, Cache::Fetched(_)) {
                    *self = Cache::Error(err.clone());
                }
                Some(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_before_first_fetch_replaces_loading() {
        let mut cache = Cache::<u32>::default();

        let err = cache.apply(Err(ApiError::new(502, "Bot API unreachable")));

        assert!(err.is_some());
        assert_eq!(cache.error().map(|e| e.status), Some(502));
    }

    #[test]
    fn error_after_fetch_keeps_stale_data() {
        let mut cache = Cache::Fetched(7u32);

        let err = cache.apply(Err(ApiError::new(502, "Bot API unreachable")));

        assert!(err.is_some());
        assert_eq!(cache.data(), Some(&7));
    }

    #[test]
    fn success_replaces_data() {
        let mut cache = Cache::Fetched(7u32);

        assert!(cache.apply(Ok(8)).is_none());
        assert_eq!(cache.data(), Some(&8));
    }
}
