use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::BookService;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    book_service: Arc<dyn BookService>,
}

impl ListBooksCommand {
    pub(crate) fn new(book_service: Arc<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListBooksCommandRequest {
    pub(crate) page_size: usize,
    pub(crate) page_token: usize,
}

impl ListBooksCommandRequest {
    pub fn new(page_size: usize, page_token: usize) -> Self {
        Self {
            page_size,
            page_token,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub next_page: Option<usize>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>, next_page: Option<usize>) -> Self {
        Self {
            books,
            next_page,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.book_service.find_books(req.page_size, req.page_token).await
            .map_err(CommandError::from)
            .map(|res| ListBooksCommandResponse::new(res.records, res.next_page))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::books::dto::BookDto;
    use crate::books::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_list_books() {
        // fresh service so the page counts are exact
        let svc = factory::create_book_service(&Configuration::new()).await;
        for i in 0..4 {
            let _ = svc.add_book(&BookDto::new(format!("book {}", i).as_str(), "author", "isbn"))
                .await.expect("should add book");
        }

        let cmd = ListBooksCommand::new(svc);
        let res = cmd.execute(ListBooksCommandRequest::new(3, 0)).await.expect("should list books");
        assert_eq!(3, res.books.len());
        assert_eq!(Some(3), res.next_page);

        let res = cmd.execute(ListBooksCommandRequest::new(3, 3)).await.expect("should list books");
        assert_eq!(1, res.books.len());
        assert_eq!(None, res.next_page);
    }

    #[tokio::test]
    async fn test_should_run_list_books_on_empty_store() {
        let svc = factory::create_book_service(&Configuration::new()).await;
        let cmd = ListBooksCommand::new(svc);
        let res = cmd.execute(ListBooksCommandRequest::new(10, 0)).await.expect("should list books");
        assert!(res.books.is_empty());
        assert_eq!(None, res.next_page);
    }
}
