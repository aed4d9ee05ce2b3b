//! Subject client.

use reqwest::Method;

use super::ApiClient;
use crate::errors::AppError;
use crate::models::{require, CreateSubjectRequest, Subject, UpdateSubjectRequest};
use crate::normalize::{unwrap_list, unwrap_record, Keys};

const ENVELOPE: Keys = &["data"];

/// Client for `/subjects`.
pub struct Subjects<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn subjects(&self) -> Subjects<'_> {
        Subjects { api: self }
    }
}

impl Subjects<'_> {
    /// GET /subjects - List all subjects.
    pub async fn list_all(&self) -> Result<Vec<Subject>, AppError> {
        let body = self.api.get_json(&["subjects"]).await?;
        Ok(unwrap_list(&body).iter().map(Subject::from_api).collect())
    }

    /// GET /subjects/:id - Get a single subject with its study times.
    pub async fn get(&self, subject_id: &str) -> Result<Subject, AppError> {
        require(subject_id, "subjectId")?;
        let body = self.api.get_json(&["subjects", subject_id]).await?;
        Ok(Subject::from_api(unwrap_record(&body, ENVELOPE)))
    }

    /// POST /subjects - Create a new subject.
    pub async fn create(&self, request: &CreateSubjectRequest) -> Result<Subject, AppError> {
        request.validate()?;
        let body = self
            .api
            .send_json(Method::POST, &["subjects"], request)
            .await?;
        Ok(Subject::from_api(unwrap_record(&body, ENVELOPE)))
    }

    /// PUT /subjects/:id - Update a subject.
    pub async fn update(
        &self,
        subject_id: &str,
        request: &UpdateSubjectRequest,
    ) -> Result<Subject, AppError> {
        require(subject_id, "subjectId")?;
        request.validate()?;
        let body = self
            .api
            .send_json(Method::PUT, &["subjects", subject_id], request)
            .await?;
        Ok(Subject::from_api(unwrap_record(&body, ENVELOPE)))
    }

    /// DELETE /subjects/:id - Delete a subject and, on the backend, its study times.
    pub async fn delete(&self, subject_id: &str) -> Result<(), AppError> {
        require(subject_id, "subjectId")?;
        self.api.delete(&["subjects", subject_id]).await
    }
}
