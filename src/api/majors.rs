//! Major client.

use super::ApiClient;
use crate::errors::AppError;
use crate::models::Major;
use crate::normalize::unwrap_list;

/// Client for `/majors`.
pub struct Majors<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn majors(&self) -> Majors<'_> {
        Majors { api: self }
    }
}

impl Majors<'_> {
    /// GET /majors - List all majors.
    pub async fn list_all(&self) -> Result<Vec<Major>, AppError> {
        let body = self.api.get_json(&["majors"]).await?;
        Ok(unwrap_list(&body).iter().map(Major::from_api).collect())
    }
}
