pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

// BookRepository specializes the generic repository for books; the
// supertrait is the generic-repository view of the same instance.
pub(crate) trait BookRepository: Repository<BookEntity> {}
