//! Synchronous client core for the book-search service.
//!
//! # Overview
//! Two independent pieces: a numeric aggregation utility and a small HTTP
//! client for the book-search endpoint. The client never touches a concrete
//! HTTP stack — it drives an injected [`Transport`](http::Transport), so
//! tests substitute a fake that records calls and returns canned data.
//!
//! # Design
//! - `BookClient` is stateless across calls — it holds only `base_url` and
//!   the transport it was constructed with.
//! - The transport boundary is a two-method trait (`get`/`post`) exchanging
//!   plain-data responses, so no networking crate leaks into the core.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod numeric;
pub mod types;

pub use client::BookClient;
pub use error::FetchError;
pub use http::{HttpMethod, HttpResponse, Transport, TransportError};
pub use numeric::product;
pub use types::{Book, BookList, Isbn};
