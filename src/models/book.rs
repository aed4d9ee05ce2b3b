//! Book model: an uploaded document with its storage metadata.

use serde::Serialize;
use serde_json::Value;

use crate::normalize::{Keys, Record};

const ID: Keys = &["id", "ID"];
const ORIGINAL_NAME: Keys = &["original_name", "OriginalName"];
const STORED_NAME: Keys = &["stored_name", "StoredName"];
const PATH: Keys = &["path", "Path"];
const PUBLIC_PATH: Keys = &["public_path", "PublicPath"];
const MIME_TYPE: Keys = &["mime_type", "MimeType"];
const SIZE: Keys = &["size", "Size"];
const CHECKSUM: Keys = &["checksum", "Checksum"];
const NOTE: Keys = &["note", "Note"];

/// Multipart field name the upload endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "currBook";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    #[serde(rename = "ID")]
    pub id: i64,
    pub original_name: String,
    pub stored_name: String,
    pub path: String,
    pub public_path: String,
    pub mime_type: String,
    pub size: i64,
    pub checksum: String,
    pub note: String,
}

impl Book {
    pub fn from_api(value: &Value) -> Self {
        let r = Record::new(value);
        Self {
            id: r.int(ID),
            original_name: r.string(ORIGINAL_NAME),
            stored_name: r.string(STORED_NAME),
            path: r.string(PATH),
            public_path: r.string(PUBLIC_PATH),
            mime_type: r.string(MIME_TYPE),
            size: r.int(SIZE),
            checksum: r.string(CHECKSUM),
            note: r.string(NOTE),
        }
    }
}

/// MIME type for an upload, guessed from the file extension.
pub fn guess_mime_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_numbers_are_coerced() {
        let book = Book::from_api(&json!({
            "id": "5",
            "original_name": "handbook.pdf",
            "stored_name": "a1b2.pdf",
            "size": "2048",
            "mime_type": "application/pdf"
        }));
        assert_eq!(book.id, 5);
        assert_eq!(book.size, 2048);
        assert_eq!(book.public_path, "");
    }

    #[test]
    fn test_mime_guess() {
        assert_eq!(guess_mime_type("Handbook.PDF"), "application/pdf");
        assert_eq!(guess_mime_type("notes"), "application/octet-stream");
    }
}
