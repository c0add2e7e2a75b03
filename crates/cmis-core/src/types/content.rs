//! Document content going up (multipart) and coming down (streams).

use std::fmt;

use crate::transport::{ContentPart, Response};

/// Filename used when neither the caller nor the properties name the content.
const FALLBACK_FILENAME: &str = "content";

/// Document bytes to upload, with naming hints for the multipart part.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Content {
    bytes: Vec<u8>,
    filename: Option<String>,
    mime_type: Option<String>,
    mime_type_extension: Option<String>,
}

impl Content {
    /// Wrap document bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            ..Self::default()
        }
    }

    /// Name of the multipart file part; defaults to the document's `cmis:name`.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// MIME type of the part.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Extension appended as `.{ext}` to the part filename, for names without
    /// a usable extension (e.g. `pdf`, `png`).
    pub fn with_mime_type_extension(mut self, extension: impl Into<String>) -> Self {
        self.mime_type_extension = Some(extension.into());
        self
    }

    /// The raw bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when there are no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Resolve the multipart `content` part, naming it after `fallback_name`
    /// when no explicit filename was given.
    pub(crate) fn into_part(self, fallback_name: Option<&str>) -> ContentPart {
        let base = self
            .filename
            .or_else(|| fallback_name.map(str::to_string))
            .unwrap_or_else(|| FALLBACK_FILENAME.to_string());

        let filename = match self.mime_type_extension {
            Some(ext) => format!("{base}.{ext}"),
            None => base,
        };

        ContentPart {
            filename,
            mime_type: self.mime_type,
            bytes: self.bytes,
        }
    }
}

impl From<Vec<u8>> for Content {
    fn from(bytes: Vec<u8>) -> Self {
        Content::new(bytes)
    }
}

impl From<&[u8]> for Content {
    fn from(bytes: &[u8]) -> Self {
        Content::new(bytes)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::new(text.as_bytes())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::new(text.into_bytes())
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Content")
            .field("len", &self.bytes.len())
            .field("filename", &self.filename)
            .field("mime_type", &self.mime_type)
            .field("mime_type_extension", &self.mime_type_extension)
            .finish()
    }
}

/// Document content returned by `getContentStream`.
#[derive(Clone, PartialEq, Eq)]
pub struct ContentStream {
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

impl ContentStream {
    pub(crate) fn from_response(response: Response) -> Self {
        let content_type = response.header("content-type").map(str::to_string);
        let content_length = response
            .header("content-length")
            .and_then(|v| v.trim().parse().ok());
        let filename = response
            .header("content-disposition")
            .and_then(disposition_filename);

        Self {
            content_type,
            content_length,
            filename,
            bytes: response.body,
        }
    }
}

impl fmt::Debug for ContentStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentStream")
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .field("filename", &self.filename)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Extract the filename from a `Content-Disposition` header.
///
/// The RFC 6266 extended form `filename*=UTF-8''...` wins over plain `filename`.
fn disposition_filename(header: &str) -> Option<String> {
    let mut plain = None;
    for part in header.split(';').map(str::trim) {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.eq_ignore_ascii_case("filename*") {
            if let Some(name) = extended_value(value.trim()) {
                return Some(name);
            }
        } else if key.eq_ignore_ascii_case("filename") && plain.is_none() {
            plain = Some(value.trim().trim_matches('"').to_string());
        }
    }
    plain
}

/// Decode an RFC 5987 `charset'language'value`. Only UTF-8 is understood.
fn extended_value(value: &str) -> Option<String> {
    let mut pieces = value.trim_matches('"').splitn(3, '\'');
    let charset = pieces.next()?;
    let _language = pieces.next()?;
    let encoded = pieces.next()?;
    if !charset.eq_ignore_ascii_case("utf-8") {
        return None;
    }
    urlencoding::decode(encoded).ok().map(|name| name.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_named_after_document() {
        let part = Content::from("hello").into_part(Some("greeting.txt"));
        assert_eq!(part.filename, "greeting.txt");
        assert_eq!(part.bytes, b"hello");
        assert!(part.mime_type.is_none());
    }

    #[test]
    fn explicit_filename_and_extension() {
        let part = Content::from("%PDF")
            .with_filename("report")
            .with_mime_type_extension("pdf")
            .into_part(Some("ignored"));
        assert_eq!(part.filename, "report.pdf");
    }

    #[test]
    fn fallback_filename() {
        let part = Content::from("x").into_part(None);
        assert_eq!(part.filename, "content");
    }

    #[test]
    fn stream_reads_headers() {
        let response = Response::new(
            200,
            "OK",
            vec![
                ("Content-Type".into(), "text/plain".into()),
                ("Content-Length".into(), "5".into()),
                (
                    "Content-Disposition".into(),
                    "attachment; filename=\"hello.txt\"".into(),
                ),
            ],
            b"hello".to_vec(),
        );
        let stream = ContentStream::from_response(response);
        assert_eq!(stream.content_type.as_deref(), Some("text/plain"));
        assert_eq!(stream.content_length, Some(5));
        assert_eq!(stream.filename.as_deref(), Some("hello.txt"));
        assert_eq!(stream.bytes, b"hello");
    }

    #[test]
    fn extended_filename_is_preferred() {
        let header = "attachment; filename=\"na_ve.txt\"; filename*=UTF-8''na%C3%AFve%20r%C3%A9sum%C3%A9.txt";
        assert_eq!(
            disposition_filename(header).as_deref(),
            Some("na\u{ef}ve r\u{e9}sum\u{e9}.txt")
        );
    }

    #[test]
    fn unknown_charset_falls_back_to_plain_filename() {
        let header = "inline; filename*=ISO-8859-1''caf%E9.txt; filename=cafe.txt";
        assert_eq!(disposition_filename(header).as_deref(), Some("cafe.txt"));
        assert_eq!(disposition_filename("inline"), None);
    }
}
