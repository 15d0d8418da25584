use async_trait::async_trait;
use json_patch::Patch;
use crate::core::bookstore::{BookStoreResult, PaginatedResult};

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // list entities starting at the given offset
    async fn list(&self, page_size: usize, page_token: usize) -> BookStoreResult<PaginatedResult<Entity>>;

    // get an entity, None when absent
    async fn get_by_id(&self, id: i64) -> BookStoreResult<Option<Entity>>;

    // create an entity, None when the store rejects it
    async fn create(&self, entity: &Entity) -> BookStoreResult<Option<Entity>>;

    // replace all fields of an existing entity, false when id is absent
    async fn update(&self, id: i64, entity: &Entity) -> BookStoreResult<bool>;

    // apply a sparse patch document, None when id is absent
    async fn update_partial(&self, id: i64, patch: &Patch) -> BookStoreResult<Option<Entity>>;

    // delete an entity, false when id is absent
    async fn delete_by_id(&self, id: i64) -> BookStoreResult<bool>;
}
