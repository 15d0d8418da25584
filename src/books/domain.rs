pub mod model;
pub mod service;

use async_trait::async_trait;
use json_patch::Patch;
use crate::books::dto::BookDto;
use crate::core::bookstore::{BookStoreResult, PaginatedResult};

// BookService mediates between the HTTP boundary and the repository and
// translates repository outcomes into object/None/bool results.
#[async_trait]
pub trait BookService: Sync + Send {
    async fn find_books(&self, page_size: usize, page_token: usize) -> BookStoreResult<PaginatedResult<BookDto>>;
    async fn find_book_by_id(&self, id: i64) -> BookStoreResult<Option<BookDto>>;
    async fn add_book(&self, book: &BookDto) -> BookStoreResult<Option<BookDto>>;
    async fn update_book(&self, id: i64, book: &BookDto) -> BookStoreResult<bool>;
    async fn patch_book(&self, id: i64, patch: &Patch) -> BookStoreResult<Option<BookDto>>;
    async fn remove_book(&self, id: i64) -> BookStoreResult<bool>;
}
