//! Faculty client.

use super::ApiClient;
use crate::errors::AppError;
use crate::models::Faculty;
use crate::normalize::unwrap_list;

/// Client for `/faculties`.
pub struct Faculties<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn faculties(&self) -> Faculties<'_> {
        Faculties { api: self }
    }
}

impl Faculties<'_> {
    /// GET /faculties - List all faculties.
    pub async fn list_all(&self) -> Result<Vec<Faculty>, AppError> {
        let body = self.api.get_json(&["faculties"]).await?;
        Ok(unwrap_list(&body).iter().map(Faculty::from_api).collect())
    }
}
