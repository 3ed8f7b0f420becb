//! Application wiring: the one place routes are registered.
//!
//! Both `main` and the integration tests call [`router`], so they exercise
//! the same table. The table is built once and never mutated afterward.

use std::path::PathBuf;

use crate::auth::Validator;
use crate::login;
use crate::method::Method;
use crate::pages;
use crate::router::Router;
use crate::upload;

/// Builds the recipe-site route table.
///
/// `validator` answers login attempts; `upload_dir` is where uploaded
/// files land. Trailing slashes follow the table in the docs: slashed
/// routes redirect their slashless spelling, `/upload` is a leaf.
pub fn router(validator: Validator, upload_dir: impl Into<PathBuf>) -> Router {
    Router::new()
        .on(Method::Get, "/", pages::home)
        .on(Method::Get, "/desserts/", pages::desserts)
        .on(Method::Get, "/appetizers/", pages::appetizers)
        .on(Method::Get, "/main-courses/", pages::main_courses)
        .on(Method::Get, "/user/{username}", pages::profile)
        .on(Method::Get, "/login/", login::form)
        .on(Method::Post, "/login/", login::attempt(validator))
        .on(Method::Get, "/greet/", pages::greet)
        .on(Method::Get, "/upload", upload::form)
        .on(Method::Post, "/upload", upload::receive(upload_dir))
}
