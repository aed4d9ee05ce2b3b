//! Short user-facing notices for finished steps.
//!
//! Failures are logged in full and shown as "failed to <step>". Only errors
//! the user can act on (their own input, a partially created subject) carry
//! a detail line.

use std::fmt;

use serde::Serialize;

use crate::errors::AppError;

/// A user-visible step that can succeed or fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    LoadFaculties,
    LoadMajors,
    LoadSubjects,
    LoadStudyTimes,
    LoadCurriculums,
    LoadBooks,
    AddSubject,
    UpdateSubject,
    DeleteSubject,
    AddCurriculum,
    UpdateCurriculum,
    DeleteCurriculum,
    UploadBook,
    DeleteBook,
}

impl Step {
    pub fn describe(self) -> &'static str {
        match self {
            Step::LoadFaculties => "load faculties",
            Step::LoadMajors => "load majors",
            Step::LoadSubjects => "load subjects",
            Step::LoadStudyTimes => "load study times",
            Step::LoadCurriculums => "load curriculums",
            Step::LoadBooks => "load books",
            Step::AddSubject => "add subject",
            Step::UpdateSubject => "update subject",
            Step::DeleteSubject => "delete subject",
            Step::AddCurriculum => "add curriculum",
            Step::UpdateCurriculum => "update curriculum",
            Step::DeleteCurriculum => "delete curriculum",
            Step::UploadBook => "upload book",
            Step::DeleteBook => "delete book",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Notice {
    pub fn success(step: Step) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: format!("{} succeeded", step),
            detail: None,
        }
    }

    pub fn failure(step: Step, err: &AppError) -> Self {
        let detail = match err {
            AppError::Validation(_) | AppError::Io(_) | AppError::Incomplete { .. } => {
                Some(err.message())
            }
            _ => None,
        };
        Self {
            kind: NoticeKind::Error,
            message: format!("failed to {}", step),
            detail,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({})", self.message, detail),
            None => f.write_str(&self.message),
        }
    }
}

/// Log `err` with its step and turn it into a notice.
pub fn report_failure(step: Step, err: &AppError) -> Notice {
    tracing::error!(step = step.describe(), code = err.error_code(), "{}", err);
    Notice::failure(step, err)
}

/// Notice for the outcome of `step`.
pub fn report<T>(step: Step, result: &Result<T, AppError>) -> Notice {
    match result {
        Ok(_) => Notice::success(step),
        Err(e) => report_failure(step, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_hides_backend_details() {
        let err = AppError::Http {
            status: 500,
            message: "pq: duplicate key".into(),
        };
        let notice = report_failure(Step::LoadFaculties, &err);
        assert!(notice.is_error());
        assert_eq!(notice.message, "failed to load faculties");
        assert_eq!(notice.detail, None);
        assert_eq!(notice.to_string(), "failed to load faculties");
    }

    #[test]
    fn test_validation_failure_keeps_detail() {
        let err = AppError::Validation("Credit must be between 1 and 5".into());
        let notice = Notice::failure(Step::AddSubject, &err);
        assert_eq!(
            notice.to_string(),
            "failed to add subject (Credit must be between 1 and 5)"
        );
    }

    #[test]
    fn test_report_success() {
        let result: Result<(), AppError> = Ok(());
        let notice = report(Step::DeleteCurriculum, &result);
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, "delete curriculum succeeded");
    }
}
