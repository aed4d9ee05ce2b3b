//! Study time client, scoped to one subject.

use reqwest::Method;

use super::ApiClient;
use crate::errors::AppError;
use crate::models::{require, StudyTime, StudyTimePatch, TimeRange};
use crate::normalize::{unwrap_list, unwrap_record, Keys};

const ENVELOPE: Keys = &["data"];

/// Client for `/subjects/:id/times`.
pub struct StudyTimes<'a> {
    api: &'a ApiClient,
    subject_id: &'a str,
}

impl ApiClient {
    pub fn study_times<'a>(&'a self, subject_id: &'a str) -> StudyTimes<'a> {
        StudyTimes {
            api: self,
            subject_id,
        }
    }
}

impl StudyTimes<'_> {
    fn subject(&self) -> Result<&str, AppError> {
        require(self.subject_id, "subjectId")?;
        Ok(self.subject_id)
    }

    /// GET /subjects/:id/times - List the study times of the subject.
    pub async fn list_all(&self) -> Result<Vec<StudyTime>, AppError> {
        let subject_id = self.subject()?;
        let body = self.api.get_json(&["subjects", subject_id, "times"]).await?;
        Ok(unwrap_list(&body).iter().map(StudyTime::from_api).collect())
    }

    /// GET /subjects/:id/times/:timeId - Get one study time.
    pub async fn get(&self, time_id: &str) -> Result<StudyTime, AppError> {
        let subject_id = self.subject()?;
        require(time_id, "timeId")?;
        let body = self
            .api
            .get_json(&["subjects", subject_id, "times", time_id])
            .await?;
        Ok(StudyTime::from_api(unwrap_record(&body, ENVELOPE)))
    }

    /// POST /subjects/:id/times - Add one study time range.
    ///
    /// The subject is identified by the path only; the body is `{start, end}`.
    pub async fn create(&self, range: &TimeRange) -> Result<StudyTime, AppError> {
        let subject_id = self.subject()?;
        let body = self
            .api
            .send_json(Method::POST, &["subjects", subject_id, "times"], range)
            .await?;
        Ok(StudyTime::from_api(unwrap_record(&body, ENVELOPE)))
    }

    /// PUT /subjects/:id/times/:timeId - Move one or both bounds of a study time.
    pub async fn update(&self, time_id: &str, patch: &StudyTimePatch) -> Result<StudyTime, AppError> {
        let subject_id = self.subject()?;
        require(time_id, "timeId")?;
        patch.validate()?;
        let body = self
            .api
            .send_json(Method::PUT, &["subjects", subject_id, "times", time_id], patch)
            .await?;
        Ok(StudyTime::from_api(unwrap_record(&body, ENVELOPE)))
    }

    /// DELETE /subjects/:id/times/:timeId - Delete one study time.
    pub async fn delete(&self, time_id: &str) -> Result<(), AppError> {
        let subject_id = self.subject()?;
        require(time_id, "timeId")?;
        self.api
            .delete(&["subjects", subject_id, "times", time_id])
            .await
    }
}
