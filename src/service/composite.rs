//! Subject creation together with its study times.
//!
//! This is a client-driven two-phase sequence, not a backend transaction.
//! Phase 1 creates the subject; phase 2 creates every study time concurrently.
//! Nothing is rolled back: whatever phase 2 managed to create stays on the
//! backend, and the caller learns how far it got from [`AppError::Incomplete`].
//!
//! Study time creates run as detached tasks. Dropping the returned future
//! stops the waiting, not the requests already started.

use crate::api::ApiClient;
use crate::errors::AppError;
use crate::models::{CreateSubjectRequest, StudyTime, Subject, TimeRange};

/// Result of a fully successful composite create.
#[derive(Debug, Clone)]
pub struct CreatedSubject {
    pub subject: Subject,
    /// In the order the ranges were given
    pub study_times: Vec<StudyTime>,
}

/// Create `request` and then one study time per range.
///
/// If the subject create fails, or its response carries no id, no study time
/// request is sent.
pub async fn create_subject_with_times(
    api: &ApiClient,
    request: &CreateSubjectRequest,
    ranges: &[TimeRange],
) -> Result<CreatedSubject, AppError> {
    let subject = api.subjects().create(request).await?;
    if subject.subject_id.trim().is_empty() {
        return Err(AppError::ResponseShape(
            "Missing subject_id in create subject response".to_string(),
        ));
    }
    tracing::info!(
        "Created subject {}, adding {} study time(s)",
        subject.subject_id,
        ranges.len()
    );

    // JoinHandles detach on drop, so a cancelled caller leaves these running.
    let handles: Vec<_> = ranges
        .iter()
        .copied()
        .map(|range| {
            let api = api.clone();
            let subject_id = subject.subject_id.clone();
            tokio::spawn(async move { api.study_times(&subject_id).create(&range).await })
        })
        .collect();

    let mut created = Vec::with_capacity(ranges.len());
    let mut failures = Vec::new();
    for (index, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(Ok(time)) => created.push(time),
            Ok(Err(e)) => {
                tracing::warn!("Study time #{} for {} failed: {}", index + 1, subject.subject_id, e);
                failures.push(format!("study time #{}: {}", index + 1, e.message()));
            }
            Err(e) => {
                tracing::error!("Study time task for {} aborted: {}", subject.subject_id, e);
                failures.push(format!("task aborted: {}", e));
            }
        }
    }

    if !failures.is_empty() {
        return Err(AppError::Incomplete {
            subject_id: subject.subject_id,
            created: created.len(),
            failed: failures.len(),
            message: failures.join("; "),
        });
    }

    Ok(CreatedSubject {
        subject,
        study_times: created,
    })
}
