//! Book (document) client.

use std::path::Path;

use reqwest::multipart::{Form, Part};

use super::ApiClient;
use crate::errors::AppError;
use crate::models::{guess_mime_type, Book, UPLOAD_FIELD};
use crate::normalize::{unwrap_list, unwrap_record, Keys};

/// Upload responses may arrive as `{message, book: {...}}`.
const ENVELOPE: Keys = &["book", "data"];

/// Client for `/books`.
pub struct Books<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn books(&self) -> Books<'_> {
        Books { api: self }
    }
}

fn check_id(book_id: i64) -> Result<String, AppError> {
    if book_id <= 0 {
        return Err(AppError::Validation(format!(
            "Book id must be positive, got {}",
            book_id
        )));
    }
    Ok(book_id.to_string())
}

impl Books<'_> {
    /// GET /books - List all uploaded documents.
    pub async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        let body = self.api.get_json(&["books"]).await?;
        Ok(unwrap_list(&body).iter().map(Book::from_api).collect())
    }

    /// GET /books/:id - Get one document's metadata.
    pub async fn get(&self, book_id: i64) -> Result<Book, AppError> {
        let id = check_id(book_id)?;
        let body = self.api.get_json(&["books", &id]).await?;
        Ok(Book::from_api(unwrap_record(&body, ENVELOPE)))
    }

    /// POST /books/upload - Upload a file from disk.
    pub async fn upload(&self, path: &Path) -> Result<Book, AppError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AppError::Validation(format!("Not a file path: {}", path.display())))?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        self.upload_bytes(&file_name, bytes).await
    }

    /// POST /books/upload - Upload in-memory content under `file_name`.
    pub async fn upload_bytes(&self, file_name: &str, bytes: Vec<u8>) -> Result<Book, AppError> {
        if file_name.trim().is_empty() {
            return Err(AppError::Validation("File name is required".to_string()));
        }
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(guess_mime_type(file_name))?;
        let form = Form::new().part(UPLOAD_FIELD, part);
        let body = self.api.send_multipart(&["books", "upload"], form).await?;
        Ok(Book::from_api(unwrap_record(&body, ENVELOPE)))
    }

    /// DELETE /books/:id - Delete a document.
    pub async fn delete(&self, book_id: i64) -> Result<(), AppError> {
        let id = check_id(book_id)?;
        self.api.delete(&["books", &id]).await
    }
}
