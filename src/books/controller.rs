use std::sync::Arc;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::response::Json;
use json_patch::Patch;
use serde::Deserialize;
use serde_json::Value;
use crate::books::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::books::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::books::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::books::command::patch_book_cmd::{PatchBookCommand, PatchBookCommandRequest};
use crate::books::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::books::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::books::domain::BookService;
use crate::books::dto::BookDto;
use crate::core::command::Command;
use crate::core::controller::{json_to_server_error, ServerError};
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub service: Arc<dyn BookService>,
}

impl AppState {
    pub fn new(config: Configuration, service: Arc<dyn BookService>) -> AppState {
        AppState {
            config,
            service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksParams {
    pub page_size: Option<usize>,
    pub page_token: Option<usize>,
}

pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListBooksParams>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let req = ListBooksCommandRequest::new(
        state.config.page_size(params.page_size), params.page_token.unwrap_or(0));
    let res = ListBooksCommand::new(state.service).execute(req).await?;
    Ok(Json(res.books))
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<BookDto>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.service).execute(req).await?;
    Ok(Json(res.book))
}

// accepts the raw body so a JSON payload binds no matter which content
// type the client declared
pub async fn add_book(
    State(state): State<AppState>,
    body: String) -> Result<(StatusCode, [(HeaderName, String); 1], Json<BookDto>), ServerError> {
    let book: BookDto = serde_json::from_str(body.as_str()).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.service).execute(AddBookCommandRequest::new(book)).await?;
    let location = format!("/books/{}", res.book.book_id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(res.book)))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    json: Json<Value>) -> Result<StatusCode, ServerError> {
    let book: BookDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = UpdateBookCommandRequest::new(book_id, book);
    let _ = UpdateBookCommand::new(state.service).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn patch_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    json: Json<Value>) -> Result<Json<BookDto>, ServerError> {
    let patch: Patch = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = PatchBookCommandRequest::new(book_id, patch);
    let res = PatchBookCommand::new(state.service).execute(req).await?;
    Ok(Json(res.book))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let _ = RemoveBookCommand::new(state.service).execute(req).await?;
    Ok(StatusCode::OK)
}
