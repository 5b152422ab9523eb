use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::select;
use diesel::sql_types::{BigInt, Integer};

use crate::data::models::{SessionRow, SessionWord};
use crate::schema::{
    groups, study_activities, study_session_reviews, study_sessions, word_review_items, words,
};

const SESSION_SELECT: &str = r#"
    SELECT
        ss.id,
        ss.group_id,
        g.name AS group_name,
        sa.id AS activity_id,
        sa.name AS activity_name,
        ss.created_at,
        ss.status,
        COUNT(wri.id) AS review_items_count
    FROM study_sessions ss
    JOIN groups g ON g.id = ss.group_id
    JOIN study_activities sa ON sa.id = ss.study_activity_id
    LEFT JOIN word_review_items wri ON wri.study_session_id = ss.id
"#;

pub struct StudySessionRepository;

impl StudySessionRepository {
    pub fn group_exists(conn: &mut SqliteConnection, id: i32) -> QueryResult<bool> {
        select(exists(groups::table.find(id))).get_result(conn)
    }

    pub fn activity_exists(conn: &mut SqliteConnection, id: i32) -> QueryResult<bool> {
        select(exists(study_activities::table.find(id))).get_result(conn)
    }

    pub fn session_exists(conn: &mut SqliteConnection, id: i32) -> QueryResult<bool> {
        select(exists(study_sessions::table.find(id))).get_result(conn)
    }

    /// Inserts a session and returns its id.
    pub fn create(
        conn: &mut SqliteConnection,
        group_id: i32,
        study_activity_id: i32,
    ) -> QueryResult<i32> {
        diesel::insert_into(study_sessions::table)
            .values((
                study_sessions::group_id.eq(group_id),
                study_sessions::study_activity_id.eq(study_activity_id),
            ))
            .execute(conn)?;

        last_insert_id(conn)
    }

    pub fn find_summary(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<SessionRow>> {
        diesel::sql_query(format!("{SESSION_SELECT} WHERE ss.id = ? GROUP BY ss.id"))
            .bind::<Integer, _>(id)
            .get_result::<SessionRow>(conn)
            .optional()
    }

    /// Sessions that still resolve to a group and an activity.
    pub fn count(conn: &mut SqliteConnection) -> QueryResult<i64> {
        study_sessions::table
            .inner_join(groups::table)
            .inner_join(study_activities::table)
            .count()
            .get_result(conn)
    }

    /// Newest first; sessions created in the same second fall back to id order.
    pub fn list_page(
        conn: &mut SqliteConnection,
        limit: i64,
        offset: i64,
    ) -> QueryResult<Vec<SessionRow>> {
        diesel::sql_query(format!(
            "{SESSION_SELECT} GROUP BY ss.id ORDER BY ss.created_at DESC, ss.id DESC LIMIT ? OFFSET ?"
        ))
        .bind::<BigInt, _>(limit)
        .bind::<BigInt, _>(offset)
        .load(conn)
    }

    pub fn session_words(
        conn: &mut SqliteConnection,
        session_id: i32,
        limit: i64,
        offset: i64,
    ) -> QueryResult<Vec<SessionWord>> {
        diesel::sql_query(
            r#"
            SELECT
                w.id,
                w.kanji,
                w.romaji,
                w.english,
                COALESCE(SUM(CASE WHEN wri.correct = 1 THEN 1 ELSE 0 END), 0) AS correct_count,
                COALESCE(SUM(CASE WHEN wri.correct = 0 THEN 1 ELSE 0 END), 0) AS wrong_count
            FROM words w
            JOIN word_review_items wri ON wri.word_id = w.id
            WHERE wri.study_session_id = ?
            GROUP BY w.id
            ORDER BY w.kanji, w.id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind::<Integer, _>(session_id)
        .bind::<BigInt, _>(limit)
        .bind::<BigInt, _>(offset)
        .load(conn)
    }

    pub fn count_session_words(conn: &mut SqliteConnection, session_id: i32) -> QueryResult<i64> {
        word_review_items::table
            .inner_join(words::table)
            .filter(word_review_items::study_session_id.eq(session_id))
            .select(diesel::dsl::count_distinct(words::id))
            .get_result(conn)
    }

    pub fn set_status(conn: &mut SqliteConnection, id: i32, status: &str) -> QueryResult<usize> {
        diesel::update(study_sessions::table.find(id))
            .set(study_sessions::status.eq(status))
            .execute(conn)
    }

    /// Clears all session history, children first. Returns (review items, sessions) removed.
    pub fn delete_all(conn: &mut SqliteConnection) -> QueryResult<(usize, usize)> {
        let items = diesel::delete(word_review_items::table).execute(conn)?;
        diesel::delete(study_session_reviews::table).execute(conn)?;
        let sessions = diesel::delete(study_sessions::table).execute(conn)?;
        Ok((items, sessions))
    }
}

pub(crate) fn last_insert_id(conn: &mut SqliteConnection) -> QueryResult<i32> {
    select(diesel::dsl::sql::<Integer>("last_insert_rowid()")).get_result(conn)
}
