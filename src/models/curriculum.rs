//! Curriculum model.

use serde::Serialize;
use serde_json::Value;

use super::require;
use crate::errors::AppError;
use crate::normalize::{Keys, Record};

const ID: Keys = &["curriculum_id", "CurriculumID", "id"];
const NAME: Keys = &["curriculum_name", "CurriculumName", "name"];
const TOTAL_CREDIT: Keys = &["total_credit", "TotalCredit", "credit"];
const START_YEAR: Keys = &["start_year", "StartYear", "startYear"];
const FACULTY_ID: Keys = &["faculty_id", "FacultyID"];
const MAJOR_ID: Keys = &["major_id", "MajorID"];
const BOOK_ID: Keys = &["book_id", "BookID"];
const DESCRIPTION: Keys = &["description", "Description"];
const FACULTY_NAME: Keys = &["faculty_name", "FacultyName"];
const MAJOR_NAME: Keys = &["major_name", "MajorName"];
const BOOK_PATH: Keys = &["book_path", "syllabusUrl", "url"];
const SUBJECT_IDS: Keys = &["subjectIds", "subjects"];

/// A curriculum: a named program with a credit total and required subjects.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Curriculum {
    #[serde(rename = "CurriculumID")]
    pub curriculum_id: String,
    pub curriculum_name: String,
    pub total_credit: i64,
    pub start_year: i64,
    #[serde(rename = "FacultyID")]
    pub faculty_id: String,
    #[serde(rename = "MajorID")]
    pub major_id: String,
    /// Reference document, if one is linked
    #[serde(rename = "BookID", skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    pub description: String,
    pub faculty_name: String,
    pub major_name: String,
    pub book_path: String,
    #[serde(rename = "SubjectIDs", skip_serializing_if = "Vec::is_empty")]
    pub subject_ids: Vec<String>,
}

impl Curriculum {
    pub fn from_api(value: &Value) -> Self {
        let r = Record::new(value);
        Self {
            curriculum_id: r.string(ID),
            curriculum_name: r.string(NAME),
            total_credit: r.int(TOTAL_CREDIT),
            start_year: r.int(START_YEAR),
            faculty_id: r.string(FACULTY_ID),
            major_id: r.string(MAJOR_ID),
            book_id: r.optional_int(BOOK_ID),
            description: r.string(DESCRIPTION),
            faculty_name: r.string(FACULTY_NAME),
            major_name: r.string(MAJOR_NAME),
            book_path: r.string(BOOK_PATH),
            subject_ids: r.id_list(SUBJECT_IDS),
        }
    }
}

/// Request body for creating a curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCurriculumRequest {
    pub curriculum_id: String,
    pub curriculum_name: String,
    pub total_credit: i64,
    pub start_year: i64,
    pub faculty_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateCurriculumRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require(&self.curriculum_id, "CurriculumID")?;
        require(&self.curriculum_name, "CurriculumName")?;
        require(&self.faculty_id, "FacultyID")
    }

    /// Drop blank optional fields and trim the description.
    pub fn normalized(mut self) -> Self {
        self.major_id = self.major_id.filter(|m| !m.trim().is_empty());
        self.description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        self
    }
}

impl From<&Curriculum> for CreateCurriculumRequest {
    fn from(c: &Curriculum) -> Self {
        Self {
            curriculum_id: c.curriculum_id.clone(),
            curriculum_name: c.curriculum_name.clone(),
            total_credit: c.total_credit,
            start_year: c.start_year,
            faculty_id: c.faculty_id.clone(),
            major_id: Some(c.major_id.clone()),
            book_id: c.book_id,
            description: Some(c.description.clone()),
        }
        .normalized()
    }
}

/// Partial update for a curriculum. Absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateCurriculumRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curriculum_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_credit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateCurriculumRequest {
    pub fn is_empty(&self) -> bool {
        self.curriculum_name.is_none()
            && self.total_credit.is_none()
            && self.start_year.is_none()
            && self.faculty_id.is_none()
            && self.major_id.is_none()
            && self.book_id.is_none()
            && self.description.is_none()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.is_empty() {
            return Err(AppError::Validation(
                "No curriculum fields to update".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_spellings() {
        let c = Curriculum::from_api(&json!({
            "CurriculumID": "C1",
            "name": "Computer Engineering 2025",
            "total_credit": "142",
            "StartYear": 2025,
            "faculty_id": "F1",
            "BookID": "12",
            "syllabusUrl": "/books/c1.pdf",
            "subjects": [{"SubjectID": "S1"}, "S2"]
        }));
        assert_eq!(c.curriculum_id, "C1");
        assert_eq!(c.curriculum_name, "Computer Engineering 2025");
        assert_eq!(c.total_credit, 142);
        assert_eq!(c.start_year, 2025);
        assert_eq!(c.book_id, Some(12));
        assert_eq!(c.book_path, "/books/c1.pdf");
        assert_eq!(c.subject_ids, vec!["S1", "S2"]);
        assert_eq!(c.major_id, "");
    }

    #[test]
    fn test_zero_book_id_is_no_reference() {
        let c = Curriculum::from_api(&json!({"curriculum_id": "C1", "book_id": 0}));
        assert_eq!(c.book_id, None);
    }

    #[test]
    fn test_round_trip_to_create_body() {
        let source = json!({
            "curriculum_id": "C1",
            "curriculum_name": "CPE",
            "total_credit": 140,
            "start_year": 2024,
            "faculty_id": "F1",
            "major_id": "M1",
            "book_id": 3,
            "description": "Core program"
        });
        let dto = CreateCurriculumRequest::from(&Curriculum::from_api(&source));
        assert_eq!(serde_json::to_value(&dto).unwrap(), source);
    }

    #[test]
    fn test_blank_optionals_are_not_sent() {
        let c = Curriculum::from_api(&json!({"curriculum_id": "C1", "curriculum_name": "CPE", "faculty_id": "F1", "description": "   "}));
        let dto = CreateCurriculumRequest::from(&c);
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"curriculum_id": "C1", "curriculum_name": "CPE", "total_credit": 0, "start_year": 0, "faculty_id": "F1"})
        );
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let dto = CreateCurriculumRequest::from(&Curriculum::from_api(&json!({"curriculum_id": "C1"})));
        assert_eq!(dto.validate().unwrap_err().message(), "CurriculumName is required");
    }

    #[test]
    fn test_update_body_has_only_present_fields() {
        let patch = UpdateCurriculumRequest {
            curriculum_name: Some("Renamed".into()),
            start_year: Some(2026),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"curriculum_name": "Renamed", "start_year": 2026})
        );
        assert!(UpdateCurriculumRequest::default().validate().is_err());
    }
}
