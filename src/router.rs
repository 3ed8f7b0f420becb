//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path,
//! you get back one of exactly four outcomes: a bound handler, a 404, a
//! 405, or a trailing-slash redirect. That is all.
//!
//! # Trailing slashes
//!
//! A pattern registered **with** a trailing slash (`/desserts/`) is a
//! *branch*: the slashless request `/desserts` answers with a
//! `308 Permanent Redirect` to the canonical form, query string intact.
//! A pattern registered **without** one (`/upload`) is a *leaf*: the
//! slashed request `/upload/` is simply not a registered path, 404.
//! The two spellings are distinct patterns; pick one when registering.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// One radix tree per HTTP method — no allocations on the hot path. Build
/// it once at startup, hand it to [`Server::serve`](crate::Server::serve);
/// registrations chain, and the finished table is immutable.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

/// Why a (method, path) pair did not resolve to a handler.
///
/// These are routing *outcomes*, not handler errors: the dispatcher maps
/// them straight to 404 / 405 / 308 responses.
#[derive(Debug, Eq, PartialEq)]
pub enum RouteError {
    /// No pattern matches the path under any method.
    NotFound,
    /// The path is registered, just not for this method.
    MethodNotAllowed { allow: Vec<Method> },
    /// The path is one trailing slash short of a registered branch route.
    Redirect { location: String },
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Registers a handler for a method + path pair. Returns `self` for
    /// chaining.
    ///
    /// Path parameters use `{name}` syntax; the matched value arrives
    /// percent-decoded through `req.param("name")`:
    ///
    /// ```rust,no_run
    /// # use skillet::{Method, Request, Response, Router};
    /// # async fn profile(_: Request) -> Response { Response::text("") }
    /// # async fn greet(_: Request) -> Response { Response::text("") }
    /// Router::new()
    ///     .on(Method::Get, "/user/{username}", profile)
    ///     .on(Method::Get, "/greet/", greet);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics on a malformed pattern — registration happens once at
    /// startup, and a bad route table is not worth limping past.
    pub fn on(self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.add(method, path, handler)
    }

    fn add(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Resolves a concrete (method, path) pair.
    ///
    /// On a match, returns the handler and its percent-decoded path
    /// parameters. Otherwise reports, in order of precedence: the path
    /// exists under another method (405), the canonical slashed form
    /// exists (308), or nothing matches (404).
    pub fn route(
        &self,
        method: Method,
        path: &str,
    ) -> Result<(BoxedHandler, HashMap<String, String>), RouteError> {
        if let Some(tree) = self.routes.get(&method) {
            if let Ok(matched) = tree.at(path) {
                let handler = Arc::clone(matched.value);
                let params = matched
                    .params
                    .iter()
                    .map(|(k, v)| (k.to_owned(), url_escape::decode(v).into_owned()))
                    .collect();
                return Ok((handler, params));
            }
        }

        let allow = self.allowed_methods(path);
        if !allow.is_empty() {
            return Err(RouteError::MethodNotAllowed { allow });
        }

        if !path.ends_with('/') {
            let slashed = format!("{path}/");
            if !self.allowed_methods(&slashed).is_empty() {
                return Err(RouteError::Redirect { location: slashed });
            }
        }

        Err(RouteError::NotFound)
    }

    /// Dispatches one request all the way to a response.
    ///
    /// Resolves the route, binds the matched parameters, and invokes the
    /// handler; routing failures render as their 404 / 405 / 308
    /// responses. The server's hot path runs through here, and tests use
    /// it to drive the app without a socket:
    ///
    /// ```rust,no_run
    /// # use skillet::{Method, Request, Response, Router};
    /// # async fn greet(_: Request) -> Response { Response::text("hi") }
    /// # #[tokio::main] async fn main() {
    /// let router = Router::new().on(Method::Get, "/greet/", greet);
    /// let resp = router.respond(Request::builder(Method::Get, "/greet/").build()).await;
    /// assert_eq!(resp.status_code(), 200);
    /// # }
    /// ```
    pub async fn respond(&self, mut req: Request) -> Response {
        match self.route(req.method(), req.path()) {
            Ok((handler, params)) => {
                req.set_params(params);
                handler.call(req).await
            }
            Err(outcome) => route_error_response(outcome, req.raw_query()),
        }
    }

    /// Methods whose tree matches `path`, in stable order. Feeds both the
    /// `allow` header and the unknown-method check in the server.
    pub(crate) fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let mut allow: Vec<Method> = self
            .routes
            .iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(method, _)| *method)
            .collect();
        allow.sort_by_key(|m| m.as_str());
        allow
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

/// Renders a routing failure as a response. `query` is the raw query
/// string, carried through on redirects so `/desserts?course=late` keeps
/// its parameters across the hop.
pub(crate) fn route_error_response(err: RouteError, query: &str) -> Response {
    match err {
        RouteError::NotFound => Response::builder().status(Status::NotFound).text("Not Found"),
        RouteError::MethodNotAllowed { allow } => {
            let allow = allow.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
            Response::builder()
                .status(Status::MethodNotAllowed)
                .header("allow", &allow)
                .text("Method Not Allowed")
        }
        RouteError::Redirect { location } => {
            if query.is_empty() {
                Response::redirect(&location)
            } else {
                Response::redirect(&format!("{location}?{query}"))
            }
        }
    }
}
