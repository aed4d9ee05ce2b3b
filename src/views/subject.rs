//! Subject table rows and search.

use serde::Serialize;

use crate::models::{StudyTime, Subject};

const SLOT_FORMAT: &str = "%A %H:%M";

/// One row of the subject table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRow {
    pub key: String,
    pub subject_name: String,
    pub credit: i64,
    pub major: String,
    /// One entry per study time, e.g. `Monday 09:00 - Monday 12:00`
    pub schedule: Vec<String>,
}

impl SubjectRow {
    pub fn new(subject: &Subject) -> Self {
        let major = if subject.major_name.is_empty() {
            subject.major_id.clone()
        } else {
            subject.major_name.clone()
        };
        Self {
            key: subject.subject_id.clone(),
            subject_name: subject.subject_name.clone(),
            credit: subject.credit,
            major,
            schedule: subject.study_times.iter().map(format_slot).collect(),
        }
    }
}

/// Render a study time as weekday and clock time. Unparseable bounds are
/// shown as delivered.
pub fn format_slot(time: &StudyTime) -> String {
    match time.bounds() {
        Some((start, end)) => format!(
            "{} - {}",
            start.format(SLOT_FORMAT),
            end.format(SLOT_FORMAT)
        ),
        None => format!("{} - {}", time.start_at, time.end_at),
    }
}

pub fn subject_rows(subjects: &[Subject]) -> Vec<SubjectRow> {
    subjects.iter().map(SubjectRow::new).collect()
}

/// Case-insensitive match on subject name or major. A blank query keeps
/// every row.
pub fn search_subjects<'a>(rows: &'a [SubjectRow], query: &str) -> Vec<&'a SubjectRow> {
    let needle = query.trim().to_lowercase();
    rows.iter()
        .filter(|row| {
            needle.is_empty()
                || row.subject_name.to_lowercase().contains(&needle)
                || row.major.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(start: &str, end: &str) -> StudyTime {
        StudyTime {
            start_at: start.into(),
            end_at: end.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_slot() {
        // 2025-08-11 is a Monday
        let slot = time("2025-08-11 09:00", "2025-08-11 12:00");
        assert_eq!(format_slot(&slot), "Monday 09:00 - Monday 12:00");
    }

    #[test]
    fn test_format_slot_keeps_raw_text() {
        let slot = time("next week", "2025-08-11 12:00");
        assert_eq!(format_slot(&slot), "next week - 2025-08-11 12:00");
    }

    #[test]
    fn test_row_and_search() {
        let subjects = vec![
            Subject {
                subject_id: "CS101".into(),
                subject_name: "Programming".into(),
                credit: 3,
                major_name: "Computer Science".into(),
                study_times: vec![time("2025-08-10 15:00", "2025-08-10 18:00")],
                ..Default::default()
            },
            Subject {
                subject_id: "MA101".into(),
                subject_name: "Calculus".into(),
                credit: 4,
                major_id: "M-MATH".into(),
                ..Default::default()
            },
        ];
        let rows = subject_rows(&subjects);
        assert_eq!(rows[0].schedule, vec!["Sunday 15:00 - Sunday 18:00"]);
        assert_eq!(rows[1].major, "M-MATH");

        let hits = search_subjects(&rows, "COMPUTER");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "CS101");
        assert_eq!(search_subjects(&rows, "calc").len(), 1);
        assert_eq!(search_subjects(&rows, " ").len(), 2);
    }
}
