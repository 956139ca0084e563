//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, implements [`Transport`] over
//! ureq, and exercises fetch and update over real HTTP. The server's store
//! is shared with the test, so the recorded update side effect can be
//! asserted directly.

use std::net::SocketAddr;

use booksearch_core::{
    Book, BookClient, FetchError, HttpResponse, Isbn, Transport, TransportError,
};
use serde_json::json;

/// `Transport` implementation over ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data rather than `Err`, letting the client
/// handle status interpretation.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| TransportError(e.to_string()))?;
        read_response(&mut response)
    }

    fn post(&self, url: &str, body: &str) -> Result<HttpResponse, TransportError> {
        let mut response = self
            .agent
            .post(url)
            .content_type("application/json")
            .send(body.as_bytes())
            .map_err(|e| TransportError(e.to_string()))?;
        read_response(&mut response)
    }
}

fn read_response(
    response: &mut ureq::http::Response<ureq::Body>,
) -> Result<HttpResponse, TransportError> {
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TransportError(e.to_string()))?;
    Ok(HttpResponse { status, body })
}

/// Start the mock server on a random port in a background thread, serving
/// the given store.
fn start_server(db: mock_server::Db) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, db).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn fetch_and_update_lifecycle() {
    let db = mock_server::Db::default();
    let addr = start_server(db.clone());
    let client = BookClient::new(&format!("http://{addr}"), UreqTransport::new());

    // Step 1: fetch — catalog starts empty.
    let books = client.fetch_books().unwrap();
    assert!(books.is_empty(), "expected empty catalog");

    // Step 2: seed a book through the shared store, fetch it over HTTP.
    db.blocking_write().books.push(mock_server::Book {
        title: "Some book title".to_string(),
        isbn: json!("123456"),
    });
    let books = client.fetch_books().unwrap();
    assert_eq!(
        books,
        vec![Book {
            title: "Some book title".to_string(),
            isbn: Isbn::Text("123456".to_string()),
        }]
    );

    // Step 3: submit an update, verify the server recorded that exact
    // payload exactly once.
    let payload = json!({"title": "An updated title", "isbn": 12345});
    client.update_book(&payload).unwrap();
    assert_eq!(db.blocking_read().updates, vec![payload]);

    // Step 4: the update must not have changed the served catalog.
    let books = client.fetch_books().unwrap();
    assert_eq!(books.len(), 1);
}

#[test]
fn unknown_path_surfaces_as_http_status_error() {
    let addr = start_server(mock_server::Db::default());
    // Wrong base path: the server only routes `/search`.
    let client = BookClient::new(&format!("http://{addr}/api"), UreqTransport::new());

    let err = client.fetch_books().unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus { status: 404, .. }));
}

#[test]
fn unreachable_server_surfaces_as_transport_error() {
    // Bind a listener to reserve a port, then drop it so nothing accepts.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = BookClient::new(&format!("http://127.0.0.1:{port}"), UreqTransport::new());

    let err = client.fetch_books().unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}
