//! The stateless page handlers: home, the three recipe pages, the profile
//! page, and the greeting.

use crate::request::Request;
use crate::response::Response;
use crate::templates;

/// `GET /` — the home page.
pub async fn home(_req: Request) -> Response {
    Response::html(templates::index(None))
}

/// `GET /desserts/`
pub async fn desserts(_req: Request) -> Response {
    Response::text("Here are some delicious dessert recipes!")
}

/// `GET /appetizers/`
pub async fn appetizers(_req: Request) -> Response {
    Response::text("Check out these tasty appetizer recipes!")
}

/// `GET /main-courses/`
pub async fn main_courses(_req: Request) -> Response {
    Response::text("Discover a variety of flavorful main course recipes!")
}

/// `GET /user/{username}` — the profile page.
///
/// The username arrives percent-decoded from the router, so
/// `/user/Pineapple%20Jack` shows "Pineapple Jack's profile".
pub async fn profile(req: Request) -> Response {
    let username = req.param("username").unwrap_or_default();
    Response::text(format!("{username}'s profile"))
}

/// `GET /greet/` — greets by the optional `name` query parameter.
///
/// An empty `name` (`/greet/?name=`) reads the same as an absent one.
pub async fn greet(req: Request) -> Response {
    match req.query("name") {
        Some(name) if !name.is_empty() => Response::text(format!("Hello, {name}!")),
        _ => Response::text("Hello, anonymous user!"),
    }
}
