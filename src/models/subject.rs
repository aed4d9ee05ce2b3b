//! Subject (course) model.

use serde::Serialize;
use serde_json::Value;

use super::{require, StudyTime};
use crate::errors::AppError;
use crate::normalize::{Keys, Record};

const ID: Keys = &["subject_id", "subjectId", "SubjectID", "id"];
const NAME: Keys = &["subject_name", "subjectName", "SubjectName", "name"];
const CREDIT: Keys = &["credit", "Credit"];
const MAJOR_ID: Keys = &["major_id", "majorId", "MajorID"];
const FACULTY_ID: Keys = &["faculty_id", "facultyId", "FacultyID"];
const MAJOR_NAME: Keys = &["major_name", "majorName", "MajorName"];
const FACULTY_NAME: Keys = &["faculty_name", "facultyName", "FacultyName"];
const STUDY_TIMES: Keys = &["study_times", "StudyTimes", "schedule"];

/// Inclusive credit bounds accepted when a subject is submitted.
pub const MIN_CREDIT: i64 = 1;
pub const MAX_CREDIT: i64 = 5;

/// A subject as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Subject {
    #[serde(rename = "SubjectID")]
    pub subject_id: String,
    #[serde(rename = "SubjectName")]
    pub subject_name: String,
    #[serde(rename = "Credit")]
    pub credit: i64,
    #[serde(rename = "MajorID")]
    pub major_id: String,
    #[serde(rename = "FacultyID")]
    pub faculty_id: String,
    #[serde(rename = "MajorName", skip_serializing_if = "String::is_empty")]
    pub major_name: String,
    #[serde(rename = "FacultyName", skip_serializing_if = "String::is_empty")]
    pub faculty_name: String,
    #[serde(rename = "StudyTimes", skip_serializing_if = "Vec::is_empty")]
    pub study_times: Vec<StudyTime>,
}

impl Subject {
    pub fn from_api(value: &Value) -> Self {
        let r = Record::new(value);
        Self {
            subject_id: r.string(ID),
            subject_name: r.string(NAME),
            credit: r.int(CREDIT),
            major_id: r.string(MAJOR_ID),
            faculty_id: r.string(FACULTY_ID),
            major_name: r.string(MAJOR_NAME),
            faculty_name: r.string(FACULTY_NAME),
            study_times: r.array(STUDY_TIMES).iter().map(StudyTime::from_api).collect(),
        }
    }
}

fn check_credit(credit: i64) -> Result<(), AppError> {
    if !(MIN_CREDIT..=MAX_CREDIT).contains(&credit) {
        return Err(AppError::Validation(format!(
            "Credit must be a number between {} and {}",
            MIN_CREDIT, MAX_CREDIT
        )));
    }
    Ok(())
}

/// Request body for creating a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateSubjectRequest {
    pub subject_id: String,
    pub subject_name: String,
    pub credit: i64,
    pub major_id: String,
    pub faculty_id: String,
}

impl CreateSubjectRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require(&self.subject_id, "SubjectID")?;
        require(&self.subject_name, "SubjectName")?;
        require(&self.major_id, "MajorID")?;
        require(&self.faculty_id, "FacultyID")?;
        check_credit(self.credit)
    }
}

impl From<&Subject> for CreateSubjectRequest {
    fn from(subject: &Subject) -> Self {
        Self {
            subject_id: subject.subject_id.clone(),
            subject_name: subject.subject_name.clone(),
            credit: subject.credit,
            major_id: subject.major_id.clone(),
            faculty_id: subject.faculty_id.clone(),
        }
    }
}

/// Request body for updating a subject. Absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateSubjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_id: Option<String>,
}

impl UpdateSubjectRequest {
    pub fn is_empty(&self) -> bool {
        self.subject_name.is_none() && self.credit.is_none() && self.major_id.is_none()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.is_empty() {
            return Err(AppError::Validation("No subject fields to update".to_string()));
        }
        if let Some(name) = &self.subject_name {
            require(name, "SubjectName")?;
        }
        if let Some(major_id) = &self.major_id {
            require(major_id, "MajorID")?;
        }
        match self.credit {
            Some(credit) => check_credit(credit),
            None => Ok(()),
        }
    }
}
