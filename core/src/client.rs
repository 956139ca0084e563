//! Stateless client for the book-search endpoint.
//!
//! # Design
//! `BookClient` holds a `base_url` and an injected [`Transport`] and
//! carries no mutable state between calls. Each operation is one
//! round-trip against `{base_url}/search`: `fetch_books` interprets the
//! response, `update_book` only checks that the call succeeded. Status
//! interpretation lives here, not in the transport, so a fake transport
//! in tests can hand back any status as plain data.

use serde_json::Value;

use crate::error::FetchError;
use crate::http::{HttpResponse, Transport};
use crate::types::{Book, BookList};

/// Path of the search endpoint, relative to the base URL.
const SEARCH_PATH: &str = "/search";

/// Synchronous, stateless client for the book-search service.
#[derive(Debug, Clone)]
pub struct BookClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> BookClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// GET the search endpoint and return the records under `books`.
    pub fn fetch_books(&self) -> Result<Vec<Book>, FetchError> {
        let response = self.transport.get(&self.search_url())?;
        check_status(&response)?;
        let list: BookList = serde_json::from_str(&response.body)
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(list.books)
    }

    /// POST `payload` verbatim to the search endpoint.
    ///
    /// Side effect only: the response body is ignored. Any JSON object the
    /// caller supplies is forwarded unmodified.
    pub fn update_book(&self, payload: &Value) -> Result<(), FetchError> {
        let body =
            serde_json::to_string(payload).map_err(|e| FetchError::Encode(e.to_string()))?;
        let response = self.transport.post(&self.search_url(), &body)?;
        check_status(&response)?;
        Ok(())
    }

    fn search_url(&self) -> String {
        format!("{}{SEARCH_PATH}", self.base_url)
    }
}

/// Map non-2xx statuses to `FetchError::HttpStatus`.
fn check_status(response: &HttpResponse) -> Result<(), FetchError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(FetchError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
