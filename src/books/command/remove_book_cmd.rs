use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::BookService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand {
    book_service: Arc<dyn BookService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(book_service: Arc<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        if self.book_service.remove_book(req.book_id).await.map_err(CommandError::from)? {
            Ok(RemoveBookCommandResponse {})
        } else {
            Err(CommandError::Validation {
                message: format!("delete rejected for book {}", req.book_id),
                reason_code: None,
            })
        }
    }
}
