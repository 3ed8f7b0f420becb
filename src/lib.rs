//! # skillet
//!
//! A little recipe-box web application: routing, form handling, query
//! parameters, and file upload over a tokio + hyper core.
//!
//! ## The shape of it
//!
//! Every handler is a stateless mapping from one HTTP request to one
//! response. The only state anywhere is the upload directory on disk; the
//! process holds nothing across requests. Transport hardening (TLS, rate
//! limiting, body-size limits, slow clients) stays with the reverse proxy
//! in front — the app only bounds what it holds in memory itself, the
//! multipart decoder.
//!
//! - Radix-tree routing — O(path-length) lookup via [`matchit`], with
//!   explicit 404 / 405 / trailing-slash-redirect outcomes
//! - Form decoding — urlencoded and multipart, one flat [`FormData`] out
//! - Graceful shutdown — SIGTERM / Ctrl-C, drains in-flight requests
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use skillet::{app, auth::Validator, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let validator: Validator =
//!         Arc::new(|username: &str, password: &str| username == "chef" && password == "butter");
//!     let router = app::router(validator, "uploads");
//!     Server::bind("0.0.0.0:3000").serve(router).await.unwrap();
//! }
//! ```

mod error;
mod form;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod app;
pub mod auth;
pub mod login;
pub mod pages;
pub mod templates;
pub mod upload;
pub mod urls;

pub use error::Error;
pub use form::{FilePart, FormData};
pub use handler::Handler;
pub use method::Method;
pub use request::{Request, RequestBuilder};
pub use response::{IntoResponse, Response};
pub use router::{RouteError, Router};
pub use server::Server;
pub use status::Status;
