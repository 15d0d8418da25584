use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookDto is the wire representation of a book; sparse request bodies
// bind with a zero id so the store can assign one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    #[serde(rename = "id", default)]
    pub book_id: i64,
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
}

impl BookDto {
    pub fn new(name: &str, author: &str, isbn: &str) -> BookDto {
        BookDto {
            book_id: 0,
            name: name.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.book_id
    }
}
