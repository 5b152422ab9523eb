use diesel::{
    SqliteConnection,
    connection::SimpleConnection,
    r2d2::{ConnectionManager, CustomizeConnection, Pool},
};

use crate::data::models::ApiError;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS groups (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS study_activities (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    url TEXT
);

CREATE TABLE IF NOT EXISTS words (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    kanji TEXT NOT NULL,
    romaji TEXT NOT NULL,
    english TEXT NOT NULL,
    parts TEXT
);

CREATE TABLE IF NOT EXISTS study_sessions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    group_id INTEGER NOT NULL REFERENCES groups(id),
    study_activity_id INTEGER NOT NULL REFERENCES study_activities(id),
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    status TEXT
);

CREATE TABLE IF NOT EXISTS word_review_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word_id INTEGER NOT NULL REFERENCES words(id),
    study_session_id INTEGER NOT NULL REFERENCES study_sessions(id),
    correct BOOLEAN NOT NULL
);

CREATE TABLE IF NOT EXISTS study_session_reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id INTEGER NOT NULL UNIQUE REFERENCES study_sessions(id),
    rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
    feedback TEXT,
    completion_status TEXT NOT NULL CHECK (completion_status IN ('completed', 'abandoned')),
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_study_sessions_created_at ON study_sessions(created_at);
CREATE INDEX IF NOT EXISTS idx_word_review_items_session ON word_review_items(study_session_id);
"#;

/// Applied to every connection the pool hands out.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn build_pool(database_url: &str, max_size: u32) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
}

/// Creates any missing tables. Safe to run on every startup.
pub fn init_schema(conn: &mut SqliteConnection) -> Result<(), diesel::result::Error> {
    conn.batch_execute(SCHEMA)?;
    log::info!("Database schema ready");
    Ok(())
}

/// Runs diesel work on the blocking thread pool with one pooled connection.
pub async fn interact<F, T>(pool: &DbPool, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        f(&mut *conn)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("spawn_blocking join: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::prelude::*;
    use diesel::sql_types::Integer;

    #[derive(QueryableByName)]
    struct Pragma {
        #[diesel(sql_type = Integer)]
        foreign_keys: i32,
    }

    #[test]
    fn test_pool_enables_foreign_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pragma.db");
        let pool = build_pool(path.to_str().unwrap(), 1).unwrap();
        let mut conn = pool.get().unwrap();

        let pragma = diesel::sql_query("PRAGMA foreign_keys")
            .get_result::<Pragma>(&mut conn)
            .unwrap();
        assert_eq!(pragma.foreign_keys, 1);
    }

    #[tokio::test]
    async fn test_interact_runs_on_pooled_connection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interact.db");
        let pool = build_pool(path.to_str().unwrap(), 1).unwrap();

        let pragma = interact(&pool, |conn| {
            Ok(diesel::sql_query("PRAGMA foreign_keys").get_result::<Pragma>(conn)?)
        })
        .await
        .unwrap();
        assert_eq!(pragma.foreign_keys, 1);

        let err = interact(&pool, |_conn| -> Result<(), ApiError> {
            Err(ApiError::Conflict("taken".into()))
        })
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_init_schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.db");
        let pool = build_pool(path.to_str().unwrap(), 1).unwrap();
        let mut conn = pool.get().unwrap();

        init_schema(&mut conn).unwrap();
        init_schema(&mut conn).unwrap();
    }
}
