use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use json_patch::Patch;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::bookstore::{BookStoreError, BookStoreResult, PaginatedResult};
use crate::core::repository::Repository;

// In-memory backing store keyed by book id; BTreeMap keeps listings in
// id order so offset pagination is deterministic.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<BTreeMap<i64, BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(BTreeMap::new()),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn list(&self, page_size: usize, page_token: usize) -> BookStoreResult<PaginatedResult<BookEntity>> {
        let books = self.books.read().await;
        let records: Vec<BookEntity> = books.values().skip(page_token).take(page_size).cloned().collect();
        // page_token is caller-supplied and unbounded, so the offset math must not overflow
        let next_page = page_token.checked_add(page_size).filter(|next| *next < books.len());
        Ok(PaginatedResult::new(page_token, page_size, next_page, records))
    }

    async fn get_by_id(&self, id: i64) -> BookStoreResult<Option<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.get(&id).cloned())
    }

    async fn create(&self, entity: &BookEntity) -> BookStoreResult<Option<BookEntity>> {
        let mut books = self.books.write().await;
        if entity.book_id != 0 && books.contains_key(&entity.book_id) {
            tracing::debug!("rejecting create for duplicate book id {}", entity.book_id);
            return Ok(None);
        }
        let id = if entity.book_id != 0 {
            entity.book_id
        } else {
            books.keys().next_back().map_or(1, |max| max + 1)
        };
        let mut stored = entity.clone();
        stored.book_id = id;
        books.insert(id, stored.clone());
        Ok(Some(stored))
    }

    async fn update(&self, id: i64, entity: &BookEntity) -> BookStoreResult<bool> {
        let mut books = self.books.write().await;
        match books.get_mut(&id) {
            Some(existing) => {
                existing.name = entity.name.to_string();
                existing.author = entity.author.to_string();
                existing.isbn = entity.isbn.to_string();
                existing.updated_at = Utc::now().naive_utc();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_partial(&self, id: i64, patch: &Patch) -> BookStoreResult<Option<BookEntity>> {
        let mut books = self.books.write().await;
        let existing = match books.get(&id) {
            Some(existing) => existing.clone(),
            None => return Ok(None),
        };
        // patch a JSON projection and only store it back once it survived
        // both application and re-binding, so failures leave the record intact
        let mut doc = serde_json::to_value(&existing)?;
        json_patch::patch(&mut doc, patch).map_err(|err| BookStoreError::validation(
            format!("patch failed for book {}: {}", id, err).as_str(), None))?;
        let mut patched: BookEntity = serde_json::from_value(doc)?;
        if patched.book_id != id {
            return Err(BookStoreError::validation(
                format!("book id {} is immutable", id).as_str(), None));
        }
        patched.created_at = existing.created_at;
        patched.updated_at = Utc::now().naive_utc();
        books.insert(id, patched.clone());
        Ok(Some(patched))
    }

    async fn delete_by_id(&self, id: i64) -> BookStoreResult<bool> {
        let mut books = self.books.write().await;
        Ok(books.remove(&id).is_some())
    }
}

impl BookRepository for MemoryBookRepository {}
