//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;

use crate::error::Error;
use crate::form::{self, FormData};
use crate::method::Method;

/// An incoming HTTP request, parsed from the hyper connection.
///
/// The server's dispatch path builds one per request; tests build their own
/// through [`Request::builder`] and hand it straight to a handler, no
/// socket required:
///
/// ```rust
/// use skillet::{Method, Request};
///
/// let req = Request::builder(Method::Get, "/greet/?name=Jack").build();
/// assert_eq!(req.query("name"), Some("Jack"));
/// ```
pub struct Request {
    method: Method,
    path: String,
    raw_query: String,
    headers: Vec<(String, String)>,
    body: Bytes,
    params: HashMap<String, String>,
    query: HashMap<String, String>,
}

impl Request {
    /// Starts building a request for `target`, a path with an optional
    /// query string (`/greet/?name=Jack`).
    pub fn builder(method: Method, target: &str) -> RequestBuilder {
        let (path, raw_query) = match target.split_once('?') {
            Some((path, query)) => (path.to_owned(), query.to_owned()),
            None => (target.to_owned(), String::new()),
        };
        RequestBuilder {
            method,
            path,
            raw_query,
            headers: Vec::new(),
            body: Bytes::new(),
            params: HashMap::new(),
        }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn body(&self) -> &[u8] { &self.body }

    /// The raw, still-encoded query string (`name=Pineapple%20Jack`).
    /// The router carries it through on trailing-slash redirects.
    pub(crate) fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// Binds the path parameters the router matched.
    pub(crate) fn set_params(&mut self, params: HashMap<String, String>) {
        self.params = params;
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns a named path parameter, percent-decoded.
    ///
    /// For the route `/user/{username}`, `req.param("username")` on
    /// `/user/Pineapple%20Jack` returns `Some("Pineapple Jack")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns a query parameter, percent-decoded (`+` reads as a space,
    /// HTML-form style).
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Decodes the request body as form data, honoring the content type
    /// (`application/x-www-form-urlencoded` or `multipart/form-data`).
    pub async fn form(&self) -> Result<FormData, Error> {
        FormData::parse(self.header("content-type"), &self.body).await
    }
}

/// Builder for [`Request`]. Obtain via [`Request::builder`].
pub struct RequestBuilder {
    method: Method,
    path: String,
    raw_query: String,
    headers: Vec<(String, String)>,
    body: Bytes,
    params: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Binds a path parameter. The router does this from the matched
    /// pattern; tests calling a handler directly set params by hand.
    pub fn param(mut self, name: &str, value: &str) -> Self {
        self.params.insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            path: self.path,
            query: form::parse_query(&self.raw_query),
            raw_query: self.raw_query,
            headers: self.headers,
            body: self.body,
            params: self.params,
        }
    }
}
