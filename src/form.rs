//! Form decoding: query strings, urlencoded bodies, multipart uploads.
//!
//! Everything a browser form can send lands here and comes out as a
//! [`FormData`]: a flat string map of text fields plus at most one
//! [`FilePart`]. Handlers never touch boundaries, percent sequences, or
//! content-disposition headers themselves.

use std::collections::HashMap;

use bytes::Bytes;
use multer::{Constraints, Multipart, SizeLimit, parse_boundary};
use querystrong::QueryStrong;

use crate::error::Error;

/// Cap on a multipart body held in memory while decoding. Transport-level
/// body limits stay with the reverse proxy; this only bounds the decoder.
const MULTIPART_STREAM_LIMIT: u64 = 16 * 1024 * 1024;

/// Cap on any single text field. The `file` part is exempt and may use
/// the whole stream.
const MULTIPART_FIELD_LIMIT: u64 = 1024 * 1024;

/// Name of the upload form's file input, the one field allowed to grow to
/// the stream cap.
const FILE_FIELD: &str = "file";

/// A decoded form submission.
#[derive(Debug)]
pub struct FormData {
    fields: HashMap<String, String>,
    file: Option<FilePart>,
}

/// One uploaded file: the client-supplied filename (untrusted — sanitize
/// before using it as a path component) and the raw bytes.
#[derive(Debug)]
pub struct FilePart {
    filename: String,
    content: Bytes,
}

impl FilePart {
    /// The filename exactly as the client sent it.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl FormData {
    /// Decodes a request body according to its content type.
    ///
    /// `multipart/form-data` goes through the multipart decoder; anything
    /// else is treated as `application/x-www-form-urlencoded`, which also
    /// covers the empty body of a formless POST (yielding no fields).
    pub async fn parse(content_type: Option<&str>, body: &[u8]) -> Result<Self, Error> {
        match content_type {
            Some(ct) if is_multipart(ct) => Self::parse_multipart(ct, body).await,
            _ => Self::parse_urlencoded(body),
        }
    }

    fn parse_urlencoded(body: &[u8]) -> Result<Self, Error> {
        let text = std::str::from_utf8(body)
            .map_err(|_| Error::FormDecode("form body is not valid UTF-8".into()))?;
        Ok(Self { fields: parse_pairs(text), file: None })
    }

    async fn parse_multipart(content_type: &str, body: &[u8]) -> Result<Self, Error> {
        let boundary = parse_boundary(content_type)
            .map_err(|e| Error::FormDecode(format!("multipart boundary: {e}")))?;
        let limits = SizeLimit::new()
            .whole_stream(MULTIPART_STREAM_LIMIT)
            .per_field(MULTIPART_FIELD_LIMIT)
            .for_field(FILE_FIELD, MULTIPART_STREAM_LIMIT);
        let constraints = Constraints::new().size_limit(limits);
        let mut multipart = Multipart::with_reader_with_constraints(body, boundary, constraints);

        let mut fields = HashMap::new();
        let mut file = None;
        while let Some(field) = multipart.next_field().await.map_err(decode_error)? {
            let Some(name) = field.name() else {
                continue;
            };
            let name = name.to_owned();
            let filename = field.file_name().map(str::to_owned);
            let data = field.bytes().await.map_err(decode_error)?;
            match filename {
                // The upload form has a single file input; keep the first
                // file part, ignore any extras.
                Some(filename) => {
                    if file.is_none() {
                        file = Some(FilePart { filename, content: data });
                    }
                }
                None => {
                    fields.insert(name, String::from_utf8_lossy(&data).into_owned());
                }
            }
        }
        Ok(Self { fields, file })
    }

    /// Returns a text field's value.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns a text field's value or a [`Error::MissingField`].
    pub fn require(&self, name: &'static str) -> Result<&str, Error> {
        self.field(name).ok_or(Error::MissingField(name))
    }

    /// The uploaded file part, if the submission carried one.
    pub fn file(&self) -> Option<&FilePart> {
        self.file.as_ref()
    }
}

fn is_multipart(content_type: &str) -> bool {
    content_type
        .trim_start()
        .to_ascii_lowercase()
        .starts_with("multipart/form-data")
}

fn decode_error(e: multer::Error) -> Error {
    match e {
        multer::Error::StreamSizeExceeded { .. } | multer::Error::FieldSizeExceeded { .. } => {
            Error::PayloadTooLarge
        }
        other => Error::FormDecode(other.to_string()),
    }
}

/// Decodes a raw query string into a flat string map.
///
/// HTML-form semantics: `+` reads as a space before percent-decoding, so
/// `name=Pineapple+Jack` and `name=Pineapple%20Jack` agree. Entries the
/// decoder cannot represent as plain strings drop out; a query string that
/// fails to parse outright yields an empty map — junk queries never fail a
/// page load.
pub(crate) fn parse_query(raw: &str) -> HashMap<String, String> {
    parse_pairs(raw)
}

fn parse_pairs(raw: &str) -> HashMap<String, String> {
    let text = raw.replace('+', " ");
    let Ok(parsed) = QueryStrong::parse(&text) else {
        return HashMap::new();
    };
    let mut items = HashMap::with_capacity(parsed.len());
    if let Some(map) = parsed.as_map() {
        for (name, value) in map {
            if let querystrong::Value::String(value) = value {
                items.insert(name.to_owned(), value.to_owned());
            }
        }
    }
    items
}
