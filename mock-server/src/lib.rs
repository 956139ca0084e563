use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};

/// A book record as served by the search endpoint. The ISBN stays a raw
/// JSON value because the real service emits both strings and numbers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub title: String,
    pub isbn: Value,
}

/// Response envelope of `GET /search`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BookList {
    pub books: Vec<Book>,
}

/// Server state: the books to serve and every update payload received.
#[derive(Debug, Default)]
pub struct Store {
    pub books: Vec<Book>,
    pub updates: Vec<Value>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with_db(Db::default())
}

/// Build the router over a caller-owned `Db`, so tests can seed books and
/// inspect recorded updates after the fact.
pub fn app_with_db(db: Db) -> Router {
    Router::new()
        .route("/search", get(search_books).post(record_update))
        .with_state(db)
}

pub async fn run(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_db(db)).await
}

async fn search_books(State(db): State<Db>) -> Json<BookList> {
    let store = db.read().await;
    Json(BookList {
        books: store.books.clone(),
    })
}

async fn record_update(State(db): State<Db>, Json(payload): Json<Value>) -> StatusCode {
    db.write().await.updates.push(payload);
    StatusCode::NO_CONTENT
}
