//! Fixtures shared by handler and repository tests.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use tempfile::TempDir;

use crate::data::repositories::study_session::last_insert_id;
use crate::db::{self, DbPool};
use crate::schema::{groups, study_activities, study_sessions, word_review_items, words};

/// A pool over a throwaway SQLite file with the schema applied.
pub struct TestDb {
    pub pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("lang_portal_test.db");
        let pool = db::build_pool(path.to_str().expect("utf-8 temp path"), 2)
            .expect("Failed to create test pool");

        let mut conn = pool.get().expect("Failed to get test connection");
        db::init_schema(&mut conn).expect("Failed to create schema");

        TestDb { pool, _dir: dir }
    }

    pub fn conn(&self) -> PooledConnection<ConnectionManager<SqliteConnection>> {
        self.pool.get().expect("Failed to get test connection")
    }
}

pub fn insert_group(conn: &mut SqliteConnection, name: &str) -> i32 {
    diesel::insert_into(groups::table)
        .values(groups::name.eq(name))
        .execute(conn)
        .expect("Failed to insert group");
    last_insert_id(conn).unwrap()
}

pub fn insert_activity(conn: &mut SqliteConnection, name: &str) -> i32 {
    diesel::insert_into(study_activities::table)
        .values((
            study_activities::name.eq(name),
            study_activities::url.eq(Some(format!("http://localhost:8080/{}", name.to_lowercase()))),
        ))
        .execute(conn)
        .expect("Failed to insert study activity");
    last_insert_id(conn).unwrap()
}

pub fn insert_word(conn: &mut SqliteConnection, kanji: &str, romaji: &str, english: &str) -> i32 {
    diesel::insert_into(words::table)
        .values((
            words::kanji.eq(kanji),
            words::romaji.eq(romaji),
            words::english.eq(english),
        ))
        .execute(conn)
        .expect("Failed to insert word");
    last_insert_id(conn).unwrap()
}

/// Inserts a session with an explicit creation time.
pub fn insert_session_at(
    conn: &mut SqliteConnection,
    group_id: i32,
    activity_id: i32,
    created_at: &str,
) -> i32 {
    let created_at = NaiveDateTime::parse_from_str(created_at, "%Y-%m-%d %H:%M:%S")
        .expect("fixture timestamp");
    diesel::insert_into(study_sessions::table)
        .values((
            study_sessions::group_id.eq(group_id),
            study_sessions::study_activity_id.eq(activity_id),
            study_sessions::created_at.eq(created_at),
        ))
        .execute(conn)
        .expect("Failed to insert study session");
    last_insert_id(conn).unwrap()
}

pub fn insert_review_item(conn: &mut SqliteConnection, session_id: i32, word_id: i32, correct: bool) {
    diesel::insert_into(word_review_items::table)
        .values((
            word_review_items::study_session_id.eq(session_id),
            word_review_items::word_id.eq(word_id),
            word_review_items::correct.eq(correct),
        ))
        .execute(conn)
        .expect("Failed to insert word review item");
}
