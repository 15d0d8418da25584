use async_trait::async_trait;
use crate::core::bookstore::BookStoreError;

#[derive(Debug)]
pub enum CommandError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<BookStoreError> for CommandError {
    fn from(other: BookStoreError) -> Self {
        match other {
            BookStoreError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            BookStoreError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            BookStoreError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            BookStoreError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            BookStoreError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            BookStoreError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
