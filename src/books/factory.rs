use std::sync::Arc;
use crate::books::domain::service::BookServiceImpl;
use crate::books::domain::BookService;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;

pub(crate) async fn create_book_repository() -> Box<dyn BookRepository> {
    Box::new(MemoryBookRepository::new())
}

pub async fn create_book_service(config: &Configuration) -> Arc<dyn BookService> {
    let book_repo = create_book_repository().await;
    Arc::new(BookServiceImpl::new(config, book_repo))
}
