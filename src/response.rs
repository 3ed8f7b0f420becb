//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! You should not need to think about this module directly. Build a [`Response`]
//! in your handler and return it. That is the entire job description.

use bytes::Bytes;
use http_body_util::Full;
use tracing::error;

use crate::status::Status;

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// # Shortcuts (200 OK, no custom headers needed)
///
/// ```rust
/// use skillet::{Response, Status};
///
/// Response::text("Here are some delicious dessert recipes!");
/// Response::html("<h1>Welcome</h1>".to_owned());
/// Response::status(Status::NotFound);
/// ```
///
/// # Builder (custom status or headers)
///
/// ```rust
/// use skillet::{Response, Status};
///
/// Response::builder()
///     .status(Status::MethodNotAllowed)
///     .header("allow", "GET, POST")
///     .text("Method Not Allowed");
/// ```
pub struct Response {
    pub(crate) body: Vec<u8>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) status: u16,
}

impl Response {
    /// `200 OK` — `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::bytes_raw("text/plain; charset=utf-8", body.into().into_bytes())
    }

    /// `200 OK` — `text/html; charset=utf-8`.
    ///
    /// The body must already be escaped: handlers never pass
    /// user-controlled text here directly, only through the
    /// [`templates`](crate::templates) layer.
    pub fn html(body: impl Into<String>) -> Self {
        Self::bytes_raw("text/html; charset=utf-8", body.into().into_bytes())
    }

    /// Response with no body.
    pub fn status(code: Status) -> Self {
        Self { body: Vec::new(), headers: Vec::new(), status: code.into() }
    }

    /// `308 Permanent Redirect` to `location`. Used for the canonical
    /// trailing-slash redirect; 308 keeps the method on replay.
    pub fn redirect(location: &str) -> Self {
        Self::builder()
            .status(Status::PermanentRedirect)
            .header("location", location)
            .no_body()
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: Vec::new(), status: Status::Ok.into() }
    }

    /// Numeric status code, e.g. `200`.
    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// Response body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn bytes_raw(content_type: &str, body: Vec<u8>) -> Self {
        Self {
            body,
            headers: vec![("content-type".to_owned(), content_type.to_owned())],
            status: Status::Ok.into(),
        }
    }

    /// Converts into the hyper representation the connection layer sends.
    pub(crate) fn into_http(self) -> http::Response<Full<Bytes>> {
        let status = http::StatusCode::from_u16(self.status)
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
        let mut builder = http::Response::builder().status(status);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
            .body(Full::new(Bytes::from(self.body)))
            .unwrap_or_else(|e| {
                error!("response build failed: {e}");
                let mut resp =
                    http::Response::new(Full::new(Bytes::from_static(b"Internal server error.")));
                *resp.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
                resp
            })
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
/// Terminated by a typed body method — you always know what you're sending.
pub struct ResponseBuilder {
    headers: Vec<(String, String)>,
    status: u16,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code.into();
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(self, body: impl Into<String>) -> Response {
        self.finish("text/plain; charset=utf-8", body.into().into_bytes())
    }

    /// Terminate with an HTML body (`text/html; charset=utf-8`).
    pub fn html(self, body: impl Into<String>) -> Response {
        self.finish("text/html; charset=utf-8", body.into().into_bytes())
    }

    /// Terminate with no body (e.g. a redirect).
    pub fn no_body(self) -> Response {
        Response { body: Vec::new(), headers: self.headers, status: self.status }
    }

    fn finish(self, content_type: &str, body: Vec<u8>) -> Response {
        let mut headers = vec![("content-type".to_owned(), content_type.to_owned())];
        headers.extend(self.headers);
        Response { body, headers, status: self.status }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Handlers may return anything implementing this trait. Besides
/// [`Response`] itself, plain strings become `200 text/plain`, a bare
/// [`Status`] becomes a body-less response, and `Result<T, E>` lets a
/// handler use `?` on [`Error`](crate::Error) while the failure arm still
/// renders itself.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response { Response::text(self) }
}

impl IntoResponse for String {
    fn into_response(self) -> Response { Response::text(self) }
}

/// Return a [`Status`] directly from a handler: `return Status::NotFound`
impl IntoResponse for Status {
    fn into_response(self) -> Response { Response::status(self) }
}

/// Lets fallible handlers be written as `async fn(Request) -> Result<Response, Error>`.
impl<T, E> IntoResponse for Result<T, E>
where
    T: IntoResponse,
    E: IntoResponse,
{
    fn into_response(self) -> Response {
        match self {
            Ok(value) => value.into_response(),
            Err(err) => err.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_sets_plain_content_type() {
        let resp = Response::text("hello");
        assert_eq!(resp.status_code(), 200);
        assert_eq!(resp.header("content-type"), Some("text/plain; charset=utf-8"));
        assert_eq!(resp.body(), b"hello");
    }

    #[test]
    fn html_sets_html_content_type() {
        let resp = Response::html("<p>hi</p>");
        assert_eq!(resp.header("Content-Type"), Some("text/html; charset=utf-8"));
    }

    #[test]
    fn redirect_carries_location_and_308() {
        let resp = Response::redirect("/desserts/");
        assert_eq!(resp.status_code(), 308);
        assert_eq!(resp.header("location"), Some("/desserts/"));
        assert!(resp.body().is_empty());
    }

    #[test]
    fn builder_overrides_status() {
        let resp = Response::builder()
            .status(Status::MethodNotAllowed)
            .header("allow", "GET")
            .text("Method Not Allowed");
        assert_eq!(resp.status_code(), 405);
        assert_eq!(resp.header("allow"), Some("GET"));
    }

    #[test]
    fn result_into_response_renders_the_error_arm() {
        let resp: Response =
            Result::<Response, crate::Error>::Err(crate::Error::MissingField("username"))
                .into_response();
        assert_eq!(resp.status_code(), 400);
    }
}
