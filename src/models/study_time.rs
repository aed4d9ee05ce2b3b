//! Study time model: one scheduled interval of a subject.

use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::normalize::{Keys, Record};

const ID: Keys = &["id", "ID"];
const SUBJECT_ID: Keys = &["subject_id", "subjectId", "SubjectID"];
const START: Keys = &["start", "start_at", "StartAt"];
const END: Keys = &["end", "end_at", "EndAt"];

/// Wire format for study time bounds.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

const ACCEPTED_FORMATS: [&str; 4] = [
    TIME_FORMAT,
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a study time bound as the backend or a user may write it.
///
/// Offsets in RFC 3339 input are dropped; the local wall-clock time is kept.
pub fn parse_time(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

/// A study time as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StudyTime {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "SubjectID")]
    pub subject_id: String,
    /// Start as delivered by the backend
    #[serde(rename = "StartAt")]
    pub start_at: String,
    /// End as delivered by the backend
    #[serde(rename = "EndAt")]
    pub end_at: String,
}

impl StudyTime {
    pub fn from_api(value: &Value) -> Self {
        let r = Record::new(value);
        Self {
            id: r.string(ID),
            subject_id: r.string(SUBJECT_ID),
            start_at: r.string(START),
            end_at: r.string(END),
        }
    }

    /// Parsed bounds, when both parse. Ordering is not checked here.
    pub fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((parse_time(&self.start_at)?, parse_time(&self.end_at)?))
    }
}

/// A validated start/end pair, sent as the body of a study time create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    #[serde(with = "wire_time")]
    start: NaiveDateTime,
    #[serde(with = "wire_time")]
    end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, AppError> {
        if start >= end {
            return Err(AppError::Validation(format!(
                "Study time must start before it ends ({} >= {})",
                start.format(TIME_FORMAT),
                end.format(TIME_FORMAT)
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse both bounds from text, then validate ordering.
    pub fn parse(start: &str, end: &str) -> Result<Self, AppError> {
        let start_at = parse_time(start)
            .ok_or_else(|| AppError::Validation(format!("Invalid study time start: {}", start)))?;
        let end_at = parse_time(end)
            .ok_or_else(|| AppError::Validation(format!("Invalid study time end: {}", end)))?;
        Self::new(start_at, end_at)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// Partial update for a study time. Absent bounds are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudyTimePatch {
    #[serde(with = "wire_time::option", skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    #[serde(with = "wire_time::option", skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
}

impl StudyTimePatch {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.is_empty() {
            return Err(AppError::Validation("No study time fields to update".to_string()));
        }
        if let (Some(start), Some(end)) = (self.start, self.end) {
            TimeRange::new(start, end)?;
        }
        Ok(())
    }
}

mod wire_time {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIME_FORMAT))
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<NaiveDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => super::serialize(v, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}
