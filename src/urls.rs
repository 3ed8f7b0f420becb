//! Reverse routing: canonical URLs for every registered route.
//!
//! Templates and tests build links through these functions instead of
//! spelling paths out, so a route can move without chasing string literals
//! through the codebase. Anything interpolated into a path segment or
//! query value is percent-encoded; the router percent-decodes on the way
//! back in, so a username survives the round trip intact.

use url_escape::encode_component;

pub fn home() -> String {
    "/".to_owned()
}

pub fn desserts() -> String {
    "/desserts/".to_owned()
}

pub fn appetizers() -> String {
    "/appetizers/".to_owned()
}

pub fn main_courses() -> String {
    "/main-courses/".to_owned()
}

/// Profile URL for `username`. Reserved characters in the name are
/// percent-encoded so they read as one path segment.
pub fn profile(username: &str) -> String {
    format!("/user/{}", encode_component(username))
}

pub fn login() -> String {
    "/login/".to_owned()
}

/// Greeting URL, optionally carrying a `name` query parameter.
pub fn greet(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("/greet/?name={}", encode_component(name)),
        None => "/greet/".to_owned(),
    }
}

pub fn upload() -> String {
    "/upload".to_owned()
}
