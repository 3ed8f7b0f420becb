//! Handler trait and type erasure.
//!
//! The route table stores handlers of *different* concrete types (named
//! `async fn`s for the plain pages, closures capturing the credential
//! validator or the upload directory for the stateful ones) in one
//! structure. Rust collections hold a single type, so each handler is
//! erased behind `Arc<dyn ErasedHandler>`:
//!
//! ```text
//! async fn greet(req: Request) -> Response { … }      ← what you write
//!        ↓ router.on(Method::Get, "/greet/", greet)
//! Arc::new(FnHandler(greet))  as BoxedHandler         ← stored in the tree
//!        ↓ at request time
//! handler.call(req) → BoxFuture → Response            ← one virtual call
//! ```
//!
//! Per request that costs one `Arc` clone and one vtable dispatch —
//! noise next to the network I/O.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

// ── Internal types ────────────────────────────────────────────────────────────

/// A heap-allocated, type-erased future resolving to a [`Response`].
///
/// `Pin<Box<…>>` because the runtime polls the future in place;
/// `Send + 'static` so tokio may move it across worker threads.
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// signature of the public `Handler` trait. Nothing outside this crate can
/// do anything useful with it.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A heap-allocated, type-erased handler shared across concurrent requests.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every valid route handler.
///
/// You never implement this yourself: it is automatically satisfied for
/// any `async fn name(req: Request) -> impl IntoResponse`, which covers
/// plain handlers returning [`Response`] and fallible ones returning
/// `Result<Response, Error>`. The trait is sealed so the blanket impl
/// below is the only way in.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

/// `Fn(Request) -> Fut` covers named `async fn` items, closures returning
/// async blocks, and any struct implementing `Fn`.
impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Newtype holding a concrete handler `F`, bridging the typed world to the
/// trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}
