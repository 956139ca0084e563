//! The injected HTTP transport boundary.
//!
//! # Design
//! `BookClient` performs no I/O itself — every round-trip goes through a
//! caller-supplied [`Transport`]. Production code implements the trait over
//! a real HTTP library; unit tests supply a fake that records calls and
//! returns canned responses. Responses cross the boundary as plain data
//! (`HttpResponse`), so the core stays deterministic and free of networking
//! dependencies.

use std::fmt;

/// HTTP method of a recorded or executed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`] implementation and consumed by
/// `BookClient`, which interprets the status code and body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The round-trip could not be completed at all (connect failure, I/O
/// error). Status-code interpretation is the client's job, not the
/// transport's.
#[derive(Debug, Clone)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport failure: {}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// Capability to perform HTTP calls on behalf of `BookClient`.
///
/// Implementations must return a response for every answer the server
/// gives, including non-2xx statuses; `Err` is reserved for round-trips
/// that never completed. A single attempt per call — no retries.
pub trait Transport {
    /// Perform a GET against `url`.
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    /// Perform a POST against `url` with `body` as a JSON request body.
    fn post(&self, url: &str, body: &str) -> Result<HttpResponse, TransportError>;
}
