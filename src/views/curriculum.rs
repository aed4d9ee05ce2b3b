//! Curriculum table rows, search and inline editing.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Curriculum, UpdateCurriculumRequest};

/// One row of the curriculum table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumRow {
    pub key: String,
    pub id: String,
    pub name: String,
    pub credit: i64,
    pub start_year: i64,
    pub faculty_id: String,
    pub faculty_name: String,
    pub major_name: String,
    pub subject_ids: Vec<String>,
    pub syllabus_url: String,
}

impl CurriculumRow {
    /// Build a row. `faculty_names` fills in the faculty name when the record
    /// does not carry one.
    pub fn new(curriculum: &Curriculum, index: usize, faculty_names: &HashMap<String, String>) -> Self {
        let key = if curriculum.curriculum_id.is_empty() {
            format!("row-{}", index)
        } else {
            curriculum.curriculum_id.clone()
        };
        let faculty_name = if curriculum.faculty_name.is_empty() {
            faculty_names
                .get(&curriculum.faculty_id)
                .cloned()
                .unwrap_or_default()
        } else {
            curriculum.faculty_name.clone()
        };
        Self {
            key,
            id: curriculum.curriculum_id.clone(),
            name: curriculum.curriculum_name.clone(),
            credit: curriculum.total_credit,
            start_year: curriculum.start_year,
            faculty_id: curriculum.faculty_id.clone(),
            faculty_name,
            major_name: curriculum.major_name.clone(),
            subject_ids: curriculum.subject_ids.clone(),
            syllabus_url: curriculum.book_path.clone(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.id, &self.faculty_name, &self.major_name]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

pub fn curriculum_rows(
    curriculums: &[Curriculum],
    faculty_names: &HashMap<String, String>,
) -> Vec<CurriculumRow> {
    curriculums
        .iter()
        .enumerate()
        .map(|(index, c)| CurriculumRow::new(c, index, faculty_names))
        .collect()
}

/// Case-insensitive substring search. A blank query keeps every row.
pub fn search_curriculums<'a>(rows: &'a [CurriculumRow], query: &str) -> Vec<&'a CurriculumRow> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter().filter(|row| row.matches(&needle)).collect()
}

/// Values typed into an edited row. `None` means the cell was not touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurriculumEdit {
    pub name: Option<String>,
    pub credit: Option<i64>,
    pub start_year: Option<i64>,
    pub faculty_id: Option<String>,
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Patch for saving an edited row. Untouched cells keep the current value;
/// blank text is left out of the patch.
pub fn edit_patch(current: &CurriculumRow, edit: &CurriculumEdit) -> UpdateCurriculumRequest {
    UpdateCurriculumRequest {
        curriculum_name: non_empty(edit.name.clone().unwrap_or_else(|| current.name.clone())),
        total_credit: Some(edit.credit.unwrap_or(current.credit)),
        start_year: Some(edit.start_year.unwrap_or(current.start_year)),
        faculty_id: non_empty(
            edit.faculty_id
                .clone()
                .unwrap_or_else(|| current.faculty_id.clone()),
        ),
        ..Default::default()
    }
}

/// Reflect a saved patch in the table without refetching.
pub fn apply_patch(row: &mut CurriculumRow, patch: &UpdateCurriculumRequest) {
    if let Some(name) = &patch.curriculum_name {
        row.name = name.clone();
    }
    if let Some(credit) = patch.total_credit {
        row.credit = credit;
    }
    if let Some(year) = patch.start_year {
        row.start_year = year;
    }
    if let Some(faculty_id) = &patch.faculty_id {
        row.faculty_id = faculty_id.clone();
    }
}
