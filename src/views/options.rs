//! Select options and dependent selection.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Book, Faculty, Major, Subject};

/// One entry of a select box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Majors offered under the selected faculty.
///
/// Majors without a faculty are always offered. With no selection every major
/// is offered.
pub fn majors_for_faculty<'a>(majors: &'a [Major], faculty_id: Option<&str>) -> Vec<&'a Major> {
    match faculty_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(selected) => majors.iter().filter(|m| m.belongs_to(selected)).collect(),
        None => majors.iter().collect(),
    }
}

pub fn faculty_options(faculties: &[Faculty]) -> Vec<SelectOption> {
    faculties
        .iter()
        .map(|f| SelectOption {
            value: f.id.clone(),
            label: f.name.clone(),
        })
        .collect()
}

pub fn major_options(majors: &[Major], faculty_id: Option<&str>) -> Vec<SelectOption> {
    majors_for_faculty(majors, faculty_id)
        .into_iter()
        .map(|m| SelectOption {
            value: m.id.clone(),
            label: m.name.clone(),
        })
        .collect()
}

/// Books that can be linked to a curriculum. Records without a usable id are
/// left out.
pub fn book_options(books: &[Book]) -> Vec<SelectOption> {
    books
        .iter()
        .filter(|b| b.id > 0)
        .map(|b| {
            let label = [&b.original_name, &b.stored_name]
                .into_iter()
                .find(|name| !name.is_empty())
                .cloned()
                .unwrap_or_else(|| format!("Book #{}", b.id));
            SelectOption {
                value: b.id.to_string(),
                label,
            }
        })
        .collect()
}

/// `id -> name` lookup for faculties.
pub fn faculty_names(faculties: &[Faculty]) -> HashMap<String, String> {
    faculties
        .iter()
        .map(|f| (f.id.clone(), f.name.clone()))
        .collect()
}

/// `id -> name` lookup for subjects.
pub fn subject_names(subjects: &[Subject]) -> HashMap<String, String> {
    subjects
        .iter()
        .map(|s| (s.subject_id.clone(), s.subject_name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn major(id: &str, faculty: Option<&str>) -> Major {
        Major {
            id: id.to_string(),
            name: id.to_uppercase(),
            faculty_id: faculty.map(str::to_string),
        }
    }

    #[test]
    fn test_majors_filtered_by_faculty() {
        let majors = vec![
            major("m1", Some("F1")),
            major("m2", Some("F2")),
            major("m3", None),
        ];
        let ids: Vec<&str> = majors_for_faculty(&majors, Some("F1"))
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["m1", "m3"]);
    }

    #[test]
    fn test_no_selection_shows_all() {
        let majors = vec![major("m1", Some("F1")), major("m2", Some("F2"))];
        assert_eq!(majors_for_faculty(&majors, None).len(), 2);
        assert_eq!(majors_for_faculty(&majors, Some("")).len(), 2);
    }

    #[test]
    fn test_book_options_skip_invalid_ids() {
        let books = vec![
            Book {
                id: 0,
                original_name: "orphan.pdf".into(),
                ..Default::default()
            },
            Book {
                id: 2,
                stored_name: "b2.pdf".into(),
                ..Default::default()
            },
            Book {
                id: 3,
                ..Default::default()
            },
        ];
        let options = book_options(&books);
        assert_eq!(
            options,
            vec![
                SelectOption {
                    value: "2".into(),
                    label: "b2.pdf".into()
                },
                SelectOption {
                    value: "3".into(),
                    label: "Book #3".into()
                },
            ]
        );
    }

    #[test]
    fn test_name_index() {
        let faculties = vec![Faculty {
            id: "F1".into(),
            name: "Engineering".into(),
        }];
        assert_eq!(faculty_names(&faculties).get("F1").map(String::as_str), Some("Engineering"));
    }
}
