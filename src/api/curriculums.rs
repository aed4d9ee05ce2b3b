//! Curriculum client.

use reqwest::Method;

use super::ApiClient;
use crate::errors::AppError;
use crate::models::{require, CreateCurriculumRequest, Curriculum, UpdateCurriculumRequest};
use crate::normalize::{unwrap_list, unwrap_record, Keys};

/// Create responses may arrive as `{message, data: {...}}`.
const ENVELOPE: Keys = &["data"];

/// Client for `/curriculums`.
pub struct Curriculums<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn curriculums(&self) -> Curriculums<'_> {
        Curriculums { api: self }
    }
}

impl Curriculums<'_> {
    /// GET /curriculums - List all curricula.
    pub async fn list_all(&self) -> Result<Vec<Curriculum>, AppError> {
        let body = self.api.get_json(&["curriculums"]).await?;
        Ok(unwrap_list(&body).iter().map(Curriculum::from_api).collect())
    }

    /// POST /curriculums - Create a new curriculum.
    pub async fn create(&self, request: &CreateCurriculumRequest) -> Result<Curriculum, AppError> {
        request.validate()?;
        let request = request.clone().normalized();
        let body = self
            .api
            .send_json(Method::POST, &["curriculums"], &request)
            .await?;
        Ok(Curriculum::from_api(unwrap_record(&body, ENVELOPE)))
    }

    /// PUT /curriculums/:id - Update the fields present in `request`.
    pub async fn update(
        &self,
        curriculum_id: &str,
        request: &UpdateCurriculumRequest,
    ) -> Result<(), AppError> {
        require(curriculum_id, "curriculumId")?;
        request.validate()?;
        self.api
            .send_json(Method::PUT, &["curriculums", curriculum_id], request)
            .await?;
        Ok(())
    }

    /// DELETE /curriculums/:id - Delete a curriculum.
    pub async fn delete(&self, curriculum_id: &str) -> Result<(), AppError> {
        require(curriculum_id, "curriculumId")?;
        self.api.delete(&["curriculums", curriculum_id]).await
    }
}
