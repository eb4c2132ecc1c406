//! Decoding of the admin panel's multipart forms.

use std::collections::HashMap;
use std::future::ready;

use actix_web::{HttpRequest, http::header, web};
use futures_util::stream::once;

use crate::errors::AppError;
use crate::uploads::{MAX_UPLOAD_BYTES, UploadError};

/// Overall body ceiling for admin form posts.
pub const MAX_FORM_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Text fields and files of one submitted form.
#[derive(Debug, Default)]
pub struct FormFields {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl FormFields {
    /// Text value of `name`, or `""` when absent.
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Integer value of `name`; absent or malformed values read as 0.
    pub fn int(&self, name: &str) -> i32 {
        self.fields
            .get(name)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or_default()
    }

    /// A file the user actually chose. Empty file inputs are skipped while parsing.
    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: HashMap::new(),
        }
    }
}

/// Parse a buffered `multipart/form-data` body.
///
/// File parts are read chunk by chunk and rejected as soon as one grows past
/// the upload limit.
pub async fn parse_multipart(req: &HttpRequest, body: web::Bytes) -> Result<FormFields, AppError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("missing content type".to_string()))?;

    let boundary = multer::parse_boundary(content_type)
        .map_err(|e| AppError::BadRequest(format!("invalid multipart form: {e}")))?;

    let stream = once(ready(Ok::<_, std::io::Error>(body)));
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut form = FormFields::default();
    while let Some(mut field) = multipart.next_field().await.map_err(malformed)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match field.file_name().map(str::to_string) {
            None => {
                let text = field.text().await.map_err(malformed)?;
                form.fields.insert(name, text);
            }
            Some(filename) => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field.chunk().await.map_err(malformed)? {
                    if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                        return Err(UploadError::TooLarge.into());
                    }
                    bytes.extend_from_slice(&chunk);
                }
                if !filename.is_empty() && !bytes.is_empty() {
                    form.files.insert(name, UploadedFile { filename, bytes });
                }
            }
        }
    }

    Ok(form)
}

fn malformed(e: multer::Error) -> AppError {
    AppError::BadRequest(format!("invalid multipart form: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    const BOUNDARY: &str = "XBOUNDARYX";

    fn body(parts: &[(&str, Option<&str>, &[u8])]) -> web::Bytes {
        let mut out = Vec::new();
        for (name, filename, data) in parts {
            out.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match filename {
                Some(f) => out.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                ),
                None => out.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                ),
            }
            out.extend_from_slice(data);
            out.extend_from_slice(b"\r\n");
        }
        out.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        web::Bytes::from(out)
    }

    fn request() -> HttpRequest {
        TestRequest::default()
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .to_http_request()
    }

    #[actix_web::test]
    async fn reads_fields_and_files() {
        let form = parse_multipart(
            &request(),
            body(&[
                ("title", None, &b"Compiler"[..]),
                ("year", None, &b" 2023 "[..]),
                ("image", Some("shot.png"), &b"\x89PNG"[..]),
            ]),
        )
        .await
        .unwrap();

        assert_eq!(form.text("title"), "Compiler");
        assert_eq!(form.int("year"), 2023);
        assert_eq!(form.int("missing"), 0);
        let file = form.file("image").unwrap();
        assert_eq!(file.filename, "shot.png");
        assert_eq!(file.bytes, b"\x89PNG".to_vec());
    }

    #[actix_web::test]
    async fn empty_file_input_is_ignored() {
        let form = parse_multipart(&request(), body(&[("image", Some(""), &b""[..])]))
            .await
            .unwrap();
        assert!(form.file("image").is_none());
    }

    #[actix_web::test]
    async fn oversized_file_is_rejected() {
        let big = vec![7u8; MAX_UPLOAD_BYTES + 1];
        let err = parse_multipart(&request(), body(&[("photo", Some("big.jpg"), big.as_slice())]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upload(UploadError::TooLarge)));
    }

    #[actix_web::test]
    async fn missing_boundary_is_a_bad_request() {
        let req = TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "multipart/form-data"))
            .to_http_request();
        let err = parse_multipart(&req, web::Bytes::new()).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
