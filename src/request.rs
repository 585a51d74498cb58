//! Incoming HTTP request type.

use bytes::Bytes;

use crate::method::Method;

/// An incoming HTTP request with its body fully buffered.
///
/// The server builds these from hyper requests; tests build them directly:
///
/// ```rust
/// use postsgate::{Method, Request};
///
/// let req = Request::new(Method::Post, "/posts")
///     .with_header("content-type", "application/json")
///     .with_body(r#"{"userId":1,"title":"t","body":"b"}"#);
/// assert_eq!(req.header("Content-Type"), Some("application/json"));
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Bytes,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
