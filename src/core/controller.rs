use axum::http::StatusCode;
use crate::core::command::CommandError;

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

// Read misses surface as 404, every failed mutation collapses to 400.
impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Database { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::DuplicateKey { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::{json_to_server_error, ServerError};

    #[tokio::test]
    async fn test_should_map_not_found_to_404() {
        let err: ServerError = CommandError::NotFound { message: "test".to_string() }.into();
        assert_eq!(StatusCode::NOT_FOUND, err.0);
    }

    #[tokio::test]
    async fn test_should_map_failures_to_400() {
        let errors = vec![
            CommandError::Database { message: "test".to_string(), reason_code: None, retryable: false },
            CommandError::DuplicateKey { message: "test".to_string() },
            CommandError::Runtime { message: "test".to_string(), reason_code: None },
            CommandError::Serialization { message: "test".to_string() },
            CommandError::Validation { message: "test".to_string(), reason_code: None },
        ];
        for err in errors {
            let server_err: ServerError = err.into();
            assert_eq!(StatusCode::BAD_REQUEST, server_err.0);
        }
    }

    #[tokio::test]
    async fn test_should_map_json_error_to_400() {
        let err = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        assert_eq!(StatusCode::BAD_REQUEST, json_to_server_error(err).0);
    }
}
