//! The upload form and storage handlers.
//!
//! GET shows a multipart form; POST decodes it, sanitizes the client
//! filename, and writes the bytes into the upload directory. The client
//! name is attacker-controlled and never touches the filesystem raw: it
//! passes through [`sanitize_filename`] first, which cannot produce a
//! path separator or a dot-prefixed name.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::error::Error;
use crate::handler::Handler;
use crate::request::Request;
use crate::response::Response;
use crate::templates;

/// `GET /upload` — the upload form.
pub async fn form(_req: Request) -> Response {
    Response::html(templates::upload_form())
}

/// `POST /upload` — builds the receive handler around the upload
/// directory.
///
/// A submission with no file part, an empty filename, empty content, or a
/// name that sanitizes to nothing answers "No file selected." and writes
/// nothing. Otherwise the bytes land under the sanitized name,
/// overwriting any existing file of that name — last write wins, there is
/// no uniqueness guarantee.
pub fn receive(upload_dir: impl Into<PathBuf>) -> impl Handler {
    let upload_dir: Arc<PathBuf> = Arc::new(upload_dir.into());
    move |req: Request| {
        let upload_dir = Arc::clone(&upload_dir);
        async move {
            let data = req.form().await?;
            let Some(file) = data.file() else {
                return Ok::<_, Error>(Response::text("No file selected."));
            };
            if file.filename().is_empty() || file.is_empty() {
                return Ok(Response::text("No file selected."));
            }
            let Some(name) = sanitize_filename(file.filename()) else {
                return Ok(Response::text("No file selected."));
            };
            store(&upload_dir, &name, file.content()).await?;
            info!(file = %name, bytes = file.content().len(), "stored upload");
            Ok(Response::text(format!("File '{name}' uploaded successfully.")))
        }
    }
}

/// Reduces a client-supplied filename to something safe to join onto the
/// upload directory.
///
/// Path separators and whitespace break the name into words; within each
/// word only `[A-Za-z0-9_.-]` survives; the words are joined with `_` and
/// leading/trailing `.`/`_` are trimmed. `None` means nothing safe was
/// left — `../../etc/passwd` comes out as `etc_passwd`, never as a
/// traversal.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let joined = raw
        .split(|c: char| c == '/' || c == '\\' || c.is_whitespace())
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    let trimmed = joined.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Writes `content` under `name` inside `dir`, creating the directory on
/// first use. Failures surface as [`Error::StorageWrite`].
async fn store(dir: &Path, name: &str, content: &[u8]) -> Result<(), Error> {
    tokio::fs::create_dir_all(dir).await.map_err(Error::StorageWrite)?;
    tokio::fs::write(dir.join(name), content)
        .await
        .map_err(Error::StorageWrite)
}
