//! HTTP status codes as a typed enum.
//!
//! Use [`Status`] anywhere a status code is accepted — `Response::status()`,
//! `Response::builder().status()`, or as a bare handler return value.
//!
//! ```rust
//! use skillet::{Response, Status};
//!
//! // status-only, no body
//! Response::status(Status::NotFound);
//!
//! // custom status with a body
//! Response::builder()
//!     .status(Status::BadRequest)
//!     .text("missing form field `username`");
//! ```
//!
//! Only the codes this application can actually produce are listed; the
//! wire (reason phrases, HTTP/2 framing) is hyper's job.

/// A status code the recipe site can answer with.
pub enum Status {
    Ok,                  // 200 — every page, form, and inline validation message
    PermanentRedirect,   // 308 — slashless request for a slashed route
    BadRequest,          // 400 — missing form field, undecodable body
    NotFound,            // 404 — no route pattern matched
    MethodNotAllowed,    // 405 — pattern matched under a different method
    ContentTooLarge,     // 413 — multipart body over the decode cap
    InternalServerError, // 500 — upload storage failure
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok => 200,
            Status::PermanentRedirect => 308,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
            Status::ContentTooLarge => 413,
            Status::InternalServerError => 500,
        }
    }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> http::StatusCode {
        // Every listed code is a registered status, so the fallback arm is
        // unreachable in practice.
        http::StatusCode::from_u16(s.into()).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_their_registry_numbers() {
        assert_eq!(u16::from(Status::Ok), 200);
        assert_eq!(u16::from(Status::PermanentRedirect), 308);
        assert_eq!(u16::from(Status::BadRequest), 400);
        assert_eq!(u16::from(Status::NotFound), 404);
        assert_eq!(u16::from(Status::MethodNotAllowed), 405);
        assert_eq!(u16::from(Status::ContentTooLarge), 413);
        assert_eq!(u16::from(Status::InternalServerError), 500);
    }

    #[test]
    fn converts_to_hyper_status_codes() {
        assert_eq!(
            http::StatusCode::from(Status::MethodNotAllowed),
            http::StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
