use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable, Selectable};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::schema::study_session_reviews;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    Completed,
    Abandoned,
}

impl CompletionStatus {
    pub const ALL: [CompletionStatus; 2] = [CompletionStatus::Completed, CompletionStatus::Abandoned];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionStatus::Completed => "completed",
            CompletionStatus::Abandoned => "abandoned",
        }
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompletionStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompletionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(())
    }
}

/// A stored review. At most one exists per session.
#[derive(Queryable, Selectable, Serialize, Debug)]
#[diesel(table_name = study_session_reviews)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudySessionReview {
    pub id: i32,
    pub session_id: i32,
    pub rating: i32,
    pub feedback: Option<String>,
    pub completion_status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = study_session_reviews)]
pub struct NewStudySessionReview<'a> {
    pub session_id: i32,
    pub rating: i32,
    pub feedback: Option<&'a str>,
    pub completion_status: &'a str,
}

/// Review payload once field presence and JSON types have been checked.
#[derive(Debug, Validate)]
pub struct ReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,
    #[validate(custom(function = "validate_completion_status"))]
    pub completion_status: String,
    pub feedback: Option<String>,
}

impl ReviewRequest {
    /// Only meaningful after `validate()` has passed.
    pub fn status(&self) -> Option<CompletionStatus> {
        self.completion_status.parse().ok()
    }
}

fn validate_completion_status(value: &str) -> Result<(), ValidationError> {
    if value.parse::<CompletionStatus>().is_ok() {
        return Ok(());
    }
    let valid = CompletionStatus::ALL
        .iter()
        .map(CompletionStatus::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Err(ValidationError::new("completion_status").with_message(Cow::Owned(format!(
        "Completion status must be one of: {}",
        valid
    ))))
}
