use std::sync::Arc;
use async_trait::async_trait;
use json_patch::Patch;
use serde::{Deserialize, Serialize};
use crate::books::domain::BookService;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct PatchBookCommand {
    book_service: Arc<dyn BookService>,
}

impl PatchBookCommand {
    pub(crate) fn new(book_service: Arc<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PatchBookCommandRequest {
    pub(crate) book_id: i64,
    pub(crate) patch: Patch,
}

impl PatchBookCommandRequest {
    pub fn new(book_id: i64, patch: Patch) -> Self {
        Self {
            book_id,
            patch,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PatchBookCommandResponse {
    pub book: BookDto,
}

impl PatchBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<PatchBookCommandRequest, PatchBookCommandResponse> for PatchBookCommand {
    async fn execute(&self, req: PatchBookCommandRequest) -> Result<PatchBookCommandResponse, CommandError> {
        match self.book_service.patch_book(req.book_id, &req.patch).await.map_err(CommandError::from)? {
            Some(book) => Ok(PatchBookCommandResponse::new(book)),
            None => Err(CommandError::Validation {
                message: format!("patch rejected for book {}", req.book_id),
                reason_code: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use serde_json::json;
    use crate::books::command::patch_book_cmd::{PatchBookCommand, PatchBookCommandRequest};
    use crate::books::domain::BookService;
    use crate::books::dto::BookDto;
    use crate::books::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Arc<dyn BookService>> = AsyncOnce::new(async {
                factory::create_book_service(&Configuration::new()).await
            });
    }

    fn parse_patch(val: serde_json::Value) -> json_patch::Patch {
        serde_json::from_value(val).expect("should parse patch")
    }

    #[tokio::test]
    async fn test_should_run_patch_book() {
        let svc = SUT_SVC.get().await.clone();

        let created = svc.add_book(&BookDto::new("old title", "author", "isbn"))
            .await.expect("should add book").expect("should store book");

        let cmd = PatchBookCommand::new(svc);
        let patch = parse_patch(json!([{"op": "replace", "path": "/name", "value": "patched"}]));
        let res = cmd.execute(PatchBookCommandRequest::new(created.book_id, patch))
            .await.expect("should patch book");
        assert_eq!("patched", res.book.name.as_str());
        assert_eq!(created.book_id, res.book.book_id);
    }

    #[tokio::test]
    async fn test_should_fail_patch_book_for_unknown_id() {
        let svc = SUT_SVC.get().await.clone();
        let cmd = PatchBookCommand::new(svc);

        let patch = parse_patch(json!([{"op": "replace", "path": "/name", "value": "patched"}]));
        let res = cmd.execute(PatchBookCommandRequest::new(424242, patch)).await;
        assert!(matches!(res, Err(CommandError::Validation { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_fail_patch_book_with_invalid_document() {
        let svc = SUT_SVC.get().await.clone();

        let created = svc.add_book(&BookDto::new("keep me", "author", "isbn"))
            .await.expect("should add book").expect("should store book");

        let cmd = PatchBookCommand::new(svc.clone());
        let patch = parse_patch(json!([{"op": "replace", "path": "/no_such_field", "value": 1}]));
        let res = cmd.execute(PatchBookCommandRequest::new(created.book_id, patch)).await;
        assert!(matches!(res, Err(CommandError::Validation { message: _, reason_code: _ })));

        let loaded = svc.find_book_by_id(created.book_id).await
            .expect("should return book").expect("should find book");
        assert_eq!("keep me", loaded.name.as_str());
    }
}
