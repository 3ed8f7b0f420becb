//! The login form and attempt handlers.
//!
//! Two reachable states, one per method: GET renders the clean form, POST
//! reads the credentials and asks the injected [`Validator`]. A rejected
//! pair is not an error — the form comes back with the message inline,
//! status 200, exactly like the page the visitor just left. Only a
//! *missing* field is an [`Error`], answered with a 400.

use std::sync::Arc;

use crate::auth::Validator;
use crate::error::Error;
use crate::handler::Handler;
use crate::request::Request;
use crate::response::Response;
use crate::templates;

/// `GET /login/` — the clean login form. No prior POST leaves a trace
/// here; there is no state to leave.
pub async fn form(_req: Request) -> Response {
    Response::html(templates::login_form(""))
}

/// `POST /login/` — builds the attempt handler around `validator`.
pub fn attempt(validator: Validator) -> impl Handler {
    move |req: Request| {
        let validator = Arc::clone(&validator);
        async move {
            let data = req.form().await?;
            let username = data.require("username")?;
            let password = data.require("password")?;
            if validator.validate(username, password) {
                Ok::<_, Error>(Response::text(format!("Welcome, {username}! Login successful.")))
            } else {
                Ok(Response::html(templates::login_form("Invalid username/password")))
            }
        }
    }
}
