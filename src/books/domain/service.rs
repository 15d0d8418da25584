use async_trait::async_trait;
use json_patch::Patch;
use crate::books::domain::model::BookEntity;
use crate::books::domain::BookService;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::core::bookstore::{BookStoreResult, PaginatedResult};
use crate::core::domain::Configuration;

pub(crate) struct BookServiceImpl {
    config: Configuration,
    book_repository: Box<dyn BookRepository>,
}

impl BookServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            config: config.clone(),
            book_repository,
        }
    }
}

#[async_trait]
impl BookService for BookServiceImpl {
    async fn find_books(&self, page_size: usize, page_token: usize) -> BookStoreResult<PaginatedResult<BookDto>> {
        // cap the page size no matter what the caller asked for
        let page_size = std::cmp::min(page_size, self.config.max_page_size);
        let res = self.book_repository.list(page_size, page_token).await?;
        Ok(PaginatedResult::new(res.page, res.page_size, res.next_page,
                                res.records.iter().map(BookDto::from).collect()))
    }

    async fn find_book_by_id(&self, id: i64) -> BookStoreResult<Option<BookDto>> {
        self.book_repository.get_by_id(id).await.map(|book| book.as_ref().map(BookDto::from))
    }

    async fn add_book(&self, book: &BookDto) -> BookStoreResult<Option<BookDto>> {
        let created = self.book_repository.create(&BookEntity::from(book)).await?;
        Ok(created.as_ref().map(BookDto::from))
    }

    async fn update_book(&self, id: i64, book: &BookDto) -> BookStoreResult<bool> {
        self.book_repository.update(id, &BookEntity::from(book)).await
    }

    async fn patch_book(&self, id: i64, patch: &Patch) -> BookStoreResult<Option<BookDto>> {
        let patched = self.book_repository.update_partial(id, patch).await?;
        Ok(patched.as_ref().map(BookDto::from))
    }

    async fn remove_book(&self, id: i64) -> BookStoreResult<bool> {
        self.book_repository.delete_by_id(id).await
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            name: other.name.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        BookEntity::new(other.book_id,
                        other.name.as_str(),
                        other.author.as_str(),
                        other.isbn.as_str())
    }
}
