use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::BookService;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    book_service: Arc<dyn BookService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(book_service: Arc<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    pub(crate) book_id: i64,
    pub(crate) book: BookDto,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i64, book: BookDto) -> Self {
        Self {
            book_id,
            book,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        if self.book_service.update_book(req.book_id, &req.book).await.map_err(CommandError::from)? {
            Ok(UpdateBookCommandResponse {})
        } else {
            Err(CommandError::Validation {
                message: format!("update rejected for book {}", req.book_id),
                reason_code: None,
            })
        }
    }
}
