//! The template layer.
//!
//! Handlers treat this module as an opaque renderer: page name and
//! variables in, HTML string out. Every user-controlled value is escaped
//! here, explicitly, at the point it lands in markup — handlers never
//! interpolate visitor text into HTML themselves.

use crate::urls;

/// Escapes `text` for interpolation into HTML element content.
///
/// Element-content escaping only (`&`, `<`, `>`): characters like `/`
/// pass through untouched, so a message such as "Invalid
/// username/password" reads back verbatim. Nothing user-controlled is
/// ever interpolated into an attribute value here — form actions and
/// links come from [`urls`].
pub fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Shared page shell with a home link in the footer. `content` is trusted
/// markup: it comes from the renderers below, which escape anything
/// user-controlled before it gets here.
fn page(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>{title}</title></head>\n\
         <body>\n\
         {content}\n\
         <p><a href=\"{home}\">Home</a></p>\n\
         </body>\n\
         </html>\n",
        home = urls::home(),
    )
}

/// The home page, optionally greeting a named visitor.
pub fn index(name: Option<&str>) -> String {
    let greeting = match name {
        Some(name) => format!("<h1>Hello, {}!</h1>", escape(name)),
        None => "<h1>Welcome to the recipe box!</h1>".to_owned(),
    };
    let content = format!(
        "{greeting}\n\
         <ul>\n\
         <li><a href=\"{}\">Desserts</a></li>\n\
         <li><a href=\"{}\">Appetizers</a></li>\n\
         <li><a href=\"{}\">Main courses</a></li>\n\
         </ul>",
        urls::desserts(),
        urls::appetizers(),
        urls::main_courses(),
    );
    page("Recipe Box", &content)
}

/// The login form. `error` is empty on a fresh GET; a failed attempt
/// re-renders with the message inline.
pub fn login_form(error: &str) -> String {
    let notice = if error.is_empty() {
        String::new()
    } else {
        format!("<p class=\"error\">{}</p>\n", escape(error))
    };
    let content = format!(
        "<h1>Log in</h1>\n\
         {notice}\
         <form action=\"{}\" method=\"post\">\n\
         <label>Username <input type=\"text\" name=\"username\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>",
        urls::login(),
    );
    page("Log in", &content)
}

/// The upload form: one file input, posted as `multipart/form-data`.
pub fn upload_form() -> String {
    let content = format!(
        "<h1>Upload a recipe</h1>\n\
         <form action=\"{}\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"file\">\n\
         <button type=\"submit\">Upload</button>\n\
         </form>",
        urls::upload(),
    );
    page("Upload a recipe", &content)
}
