use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity abstracts a book record in the store; the identifier is
// assigned by the store on create and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    #[serde(rename = "id")]
    pub book_id: i64,
    pub name: String,
    pub author: String,
    pub isbn: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(id: i64, name: &str, author: &str, isbn: &str) -> Self {
        Self {
            book_id: id,
            name: name.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}
