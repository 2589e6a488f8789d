use lambda_http::http::StatusCode;
use thiserror::Error;

/// Failures on the lookup path. Every variant is mapped to a response at the
/// handler boundary; none of them terminate the invocation.
#[derive(Debug, Error)]
pub(crate) enum LookupError {
    /// Required configuration missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// No record matches the supplied key.
    #[error("no user found for {0}")]
    NotFound(String),

    /// Connectivity, permission, or query failure against the store.
    #[error("store error: {0}")]
    Store(String),

    /// The retrieved record cannot be decoded from the store representation
    /// or encoded to the response format.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The request carries no usable `userID` path parameter.
    #[error("missing userID path parameter")]
    MissingUserId,
}

impl LookupError {
    /// HTTP status the handler answers with for this error.
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingUserId => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Store(_) | Self::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            LookupError::NotFound("u404".to_string()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn missing_user_id_maps_to_400() {
        assert_eq!(LookupError::MissingUserId.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn remaining_kinds_map_to_500() {
        for err in [
            LookupError::Config("TABLE_NAME not set".to_string()),
            LookupError::Store("connection refused".to_string()),
            LookupError::Serialization("Age is not a number".to_string()),
        ] {
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn not_found_display_names_the_key() {
        let err = LookupError::NotFound("u404".to_string());
        assert_eq!(err.to_string(), "no user found for u404");
    }

    #[test]
    fn store_display_keeps_the_cause() {
        let err = LookupError::Store("connection refused".to_string());
        assert_eq!(err.to_string(), "store error: connection refused");
    }
}
