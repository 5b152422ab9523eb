use chrono::NaiveDateTime;
use diesel::QueryableByName;
use diesel::sql_types::{BigInt, Integer, Nullable, Text, Timestamp};
use serde::{Deserialize, Serialize};

/// A session joined with its group, its activity and the number of review items.
#[derive(QueryableByName, Debug, Clone)]
pub struct SessionRow {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Integer)]
    pub group_id: i32,
    #[diesel(sql_type = Text)]
    pub group_name: String,
    #[diesel(sql_type = Integer)]
    pub activity_id: i32,
    #[diesel(sql_type = Text)]
    pub activity_name: String,
    #[diesel(sql_type = Timestamp)]
    pub created_at: NaiveDateTime,
    #[diesel(sql_type = Nullable<Text>)]
    pub status: Option<String>,
    #[diesel(sql_type = BigInt)]
    pub review_items_count: i64,
}

/// A word reviewed during a session, with the session's tally for it.
#[derive(QueryableByName, Serialize, Debug)]
pub struct SessionWord {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub kanji: String,
    #[diesel(sql_type = Text)]
    pub romaji: String,
    #[diesel(sql_type = Text)]
    pub english: String,
    #[diesel(sql_type = BigInt)]
    pub correct_count: i64,
    #[diesel(sql_type = BigInt)]
    pub wrong_count: i64,
}

/// Session as it appears in listings and in the detail view.
///
/// End times are not tracked, so `end_time` repeats `start_time`.
#[derive(Serialize, Debug)]
pub struct StudySessionSummary {
    pub id: i32,
    pub group_id: i32,
    pub group_name: String,
    pub activity_id: i32,
    pub activity_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: Option<String>,
    pub review_items_count: i64,
}

impl From<SessionRow> for StudySessionSummary {
    fn from(row: SessionRow) -> Self {
        StudySessionSummary {
            id: row.id,
            group_id: row.group_id,
            group_name: row.group_name,
            activity_id: row.activity_id,
            activity_name: row.activity_name,
            start_time: row.created_at,
            end_time: row.created_at,
            status: row.status,
            review_items_count: row.review_items_count,
        }
    }
}

/// Body returned after creating a session
#[derive(Serialize, Debug)]
pub struct CreatedStudySession {
    pub id: i32,
    pub group_id: i32,
    pub group_name: String,
    pub activity_id: i32,
    pub activity_name: String,
    pub created_at: NaiveDateTime,
    pub status: Option<String>,
    pub review_items_count: i64,
}

impl From<SessionRow> for CreatedStudySession {
    fn from(row: SessionRow) -> Self {
        CreatedStudySession {
            id: row.id,
            group_id: row.group_id,
            group_name: row.group_name,
            activity_id: row.activity_id,
            activity_name: row.activity_name,
            created_at: row.created_at,
            status: row.status,
            review_items_count: row.review_items_count,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct StudySessionPage {
    pub items: Vec<StudySessionSummary>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

#[derive(Serialize, Debug)]
pub struct StudySessionDetail {
    pub session: StudySessionSummary,
    pub words: Vec<SessionWord>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

/// Raw `page` / `per_page` query values. Unparsable values fall back to defaults.
#[derive(Deserialize, Debug, Default)]
pub struct PageParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// Standard API response format
#[derive(Serialize, Debug)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}
