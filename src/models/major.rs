//! Major model.

use serde::Serialize;
use serde_json::Value;

use crate::normalize::{Keys, Record};

const ID: Keys = &["major_id", "majorId", "MajorID", "id"];
const NAME: Keys = &["major_name", "majorName", "MajorName", "name"];
const FACULTY_ID: Keys = &["faculty_id", "facultyId", "FacultyID"];

/// A program of study, optionally owned by a faculty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Major {
    #[serde(rename = "MajorID")]
    pub id: String,
    #[serde(rename = "MajorName")]
    pub name: String,
    /// `None` means the major is not tied to one faculty
    #[serde(rename = "FacultyID", skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<String>,
}

impl Major {
    pub fn from_api(value: &Value) -> Self {
        let r = Record::new(value);
        Self {
            id: r.string(ID),
            name: r.string(NAME),
            faculty_id: r.optional_string(FACULTY_ID),
        }
    }

    /// Whether this major is offered under the given faculty.
    ///
    /// Majors without a faculty are offered everywhere.
    pub fn belongs_to(&self, faculty_id: &str) -> bool {
        match &self.faculty_id {
            Some(own) => own == faculty_id,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_faculty_back_reference() {
        let major = Major::from_api(&json!({"majorId": "M1", "majorName": "AI", "FacultyID": "F1"}));
        assert_eq!(major.faculty_id.as_deref(), Some("F1"));
        assert!(major.belongs_to("F1"));
        assert!(!major.belongs_to("F2"));
    }

    #[test]
    fn test_empty_faculty_is_absent() {
        let major = Major::from_api(&json!({"major_id": "M2", "faculty_id": ""}));
        assert_eq!(major.faculty_id, None);
        assert!(major.belongs_to("anything"));
        assert_eq!(
            serde_json::to_value(&major).unwrap(),
            json!({"MajorID": "M2", "MajorName": ""})
        );
    }
}
