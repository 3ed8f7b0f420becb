//! Unified error type.
//!
//! Two kinds of failure flow through the app, and they are kept apart:
//!
//! - **Validation failures** a visitor can fix (bad credentials, no file
//!   chosen) never become [`Error`]s — handlers answer them inline with a
//!   200 and a message, exactly like the forms they came from.
//! - **Request and infrastructure failures** (missing form field,
//!   undecodable body, a failed upload write, a dead listener) are `Error`
//!   values. Handlers return `Result<Response, Error>` and let `?` carry
//!   them to the dispatcher, which turns them into the right status code
//!   via [`IntoResponse`].
//!
//! Routing outcomes (404 / 405 / trailing-slash redirect) are not errors
//! either — they live in [`RouteError`](crate::RouteError).

use thiserror::Error as ThisError;
use tracing::error;

use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// The error type returned by skillet's fallible operations.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A required form field was absent from a POST body.
    #[error("missing form field `{0}`")]
    MissingField(&'static str),

    /// The POST body could not be decoded as a form at all.
    #[error("could not decode form body: {0}")]
    FormDecode(String),

    /// The multipart body blew past the in-memory decode cap.
    #[error("request body exceeds the upload limit")]
    PayloadTooLarge,

    /// Writing an uploaded file to the upload directory failed.
    #[error("could not store uploaded file: {0}")]
    StorageWrite(#[source] std::io::Error),

    /// Listener-level I/O failure (bind, accept). Never produced by a
    /// handler.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Maps each error to the response the client sees. Client mistakes get a
/// 4xx with the message itself; server-side failures get a terse 5xx and a
/// log line with the detail.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::MissingField(_) | Self::FormDecode(_) => Response::builder()
                .status(Status::BadRequest)
                .text(self.to_string()),
            Self::PayloadTooLarge => Response::builder()
                .status(Status::ContentTooLarge)
                .text(self.to_string()),
            Self::StorageWrite(ref source) => {
                error!("upload write failed: {source}");
                Response::builder()
                    .status(Status::InternalServerError)
                    .text("The file could not be stored.")
            }
            Self::Io(ref source) => {
                error!("io error reached the dispatcher: {source}");
                Response::builder()
                    .status(Status::InternalServerError)
                    .text("Internal server error.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = Error::MissingField("username");
        assert_eq!(err.to_string(), "missing form field `username`");
    }

    #[test]
    fn missing_field_answers_bad_request() {
        let resp = Error::MissingField("password").into_response();
        assert_eq!(resp.status_code(), 400);
        assert!(String::from_utf8_lossy(resp.body()).contains("password"));
    }

    #[test]
    fn form_decode_answers_bad_request() {
        let resp = Error::FormDecode("no boundary".into()).into_response();
        assert_eq!(resp.status_code(), 400);
    }

    #[test]
    fn payload_too_large_answers_413() {
        let resp = Error::PayloadTooLarge.into_response();
        assert_eq!(resp.status_code(), 413);
    }

    #[test]
    fn storage_write_answers_500_without_leaking_detail() {
        let io = std::io::Error::other("disk full on /srv/uploads");
        let resp = Error::StorageWrite(io).into_response();
        assert_eq!(resp.status_code(), 500);
        let body = String::from_utf8_lossy(resp.body()).to_string();
        assert!(!body.contains("/srv/uploads"));
        assert!(body.contains("could not be stored"));
    }
}
