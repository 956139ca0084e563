//! Domain DTOs for the book-search API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined
//! independently; integration tests catch any schema drift between the two
//! crates. The service is inconsistent about ISBNs — listings carry them as
//! strings, update payloads as bare numbers — so `Isbn` is an untagged enum
//! that accepts both.

use serde::{Deserialize, Serialize};

/// A single book record returned by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub isbn: Isbn,
}

/// An ISBN as the service emits it: either a JSON string or a JSON number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Isbn {
    Number(u64),
    Text(String),
}

/// Response envelope of the search endpoint: `{"books": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookList {
    pub books: Vec<Book>,
}
