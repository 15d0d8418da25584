use std::net::SocketAddr;

use axum::{
    routing::get,
    Router,
};
use bookstore::books::controller::{add_book, find_book_by_id, list_books, patch_book, remove_book, update_book, AppState};
use bookstore::books::factory::create_book_service;
use bookstore::core::domain::Configuration;

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .json()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Configuration::new();
    let service = create_book_service(&config).await;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let state = AppState::new(config, service);

    let app = Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).patch(patch_book).delete(remove_book))
        .with_state(state);

    tracing::info!("bookstore api listening on {}", addr);
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
