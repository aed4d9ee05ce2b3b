//! Faculty model.

use serde::Serialize;
use serde_json::Value;

use crate::normalize::{Keys, Record};

const ID: Keys = &["faculty_id", "facultyId", "FacultyID", "id"];
const NAME: Keys = &["faculty_name", "facultyName", "FacultyName", "name"];

/// A faculty (school or college).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Faculty {
    #[serde(rename = "FacultyID")]
    pub id: String,
    #[serde(rename = "FacultyName")]
    pub name: String,
}

impl Faculty {
    pub fn from_api(value: &Value) -> Self {
        let r = Record::new(value);
        Self {
            id: r.string(ID),
            name: r.string(NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_spelling_resolves() {
        for value in [
            json!({"faculty_id": "F1", "faculty_name": "Engineering"}),
            json!({"facultyId": "F1", "facultyName": "Engineering"}),
            json!({"FacultyID": "F1", "FacultyName": "Engineering"}),
            json!({"id": "F1", "name": "Engineering"}),
        ] {
            let faculty = Faculty::from_api(&value);
            assert_eq!(faculty.id, "F1");
            assert_eq!(faculty.name, "Engineering");
        }
    }

    #[test]
    fn test_serializes_in_view_shape() {
        let faculty = Faculty::from_api(&json!({"faculty_id": "F1", "faculty_name": "Science"}));
        assert_eq!(
            serde_json::to_value(&faculty).unwrap(),
            json!({"FacultyID": "F1", "FacultyName": "Science"})
        );
    }
}
