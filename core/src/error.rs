//! Error types for the book-search client.
//!
//! # Design
//! One variant per failure class, so callers can tell "the network broke"
//! from "the server refused" from "the body made no sense". A missing
//! `books` key in an otherwise well-formed body lands in `Decode`, since
//! the envelope shape is part of the contract. No variant implies a retry;
//! every call is a single attempt.

use std::fmt;

use crate::http::TransportError;

/// Errors returned by `BookClient` operations.
#[derive(Debug)]
pub enum FetchError {
    /// The HTTP round-trip could not be completed.
    Transport(String),

    /// The server answered with a status outside the 2xx range.
    HttpStatus { status: u16, body: String },

    /// The response body was not valid JSON of the expected shape.
    Decode(String),

    /// The update payload could not be serialized to JSON.
    Encode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "transport failure: {msg}"),
            FetchError::HttpStatus { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            FetchError::Decode(msg) => write!(f, "response decoding failed: {msg}"),
            FetchError::Encode(msg) => write!(f, "payload encoding failed: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        FetchError::Transport(err.0)
    }
}
