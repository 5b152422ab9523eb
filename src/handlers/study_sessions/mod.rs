use axum::{
    Router,
    routing::{get, post},
};

use crate::db::DbPool;

pub mod create;
pub mod detail;
pub mod list;
pub mod reset;
pub mod review;

pub use create::create_study_session;
pub use detail::get_study_session;
pub use list::list_study_sessions;
pub use reset::reset_study_sessions;
pub use review::create_study_session_review;

pub fn study_sessions_router(pool: DbPool) -> Router {
    Router::new()
        .route("/", get(list_study_sessions).post(create_study_session))
        .route("/reset", post(reset_study_sessions))
        .route("/{id}", get(get_study_session))
        .route("/{id}/review", post(create_study_session_review))
        .with_state(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::PageParams;
    use crate::schema::study_sessions;
    use crate::test_support::{TestDb, insert_activity, insert_group};
    use crate::utils::JsonBody;
    use axum::extract::{Json, Path, Query, State};
    use axum::http::StatusCode;
    use diesel::prelude::*;
    use serde_json::json;

    #[test]
    fn test_router_builds() {
        let db = TestDb::new();
        let _router: Router = study_sessions_router(db.pool.clone());
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let db = TestDb::new();
        let mut conn = db.conn();
        let group_id = insert_group(&mut conn, "Basic Greetings");
        let activity_id = insert_activity(&mut conn, "Vocabulary Quiz");
        drop(conn);

        let Json(created) = create_study_session(
            State(db.pool.clone()),
            JsonBody(json!({"group_id": group_id, "study_activity_id": activity_id})),
        )
        .await
        .unwrap();

        let Json(detail) = get_study_session(
            State(db.pool.clone()),
            Path(created.id.to_string()),
            Query(PageParams::default()),
        )
        .await
        .unwrap();
        assert_eq!(detail.session.group_name, created.group_name);
        assert_eq!(detail.session.activity_name, created.activity_name);
        assert_eq!(detail.session.status, None);
        assert!(detail.words.is_empty());

        let (status, Json(review)) = create_study_session_review(
            State(db.pool.clone()),
            Path(created.id.to_string()),
            JsonBody(json!({"rating": 4, "completion_status": "completed"})),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(review.session_id, created.id);

        let Json(detail) = get_study_session(
            State(db.pool.clone()),
            Path(created.id.to_string()),
            Query(PageParams::default()),
        )
        .await
        .unwrap();
        assert_eq!(detail.session.status.as_deref(), Some("completed"));

        let Json(listing) = list_study_sessions(State(db.pool.clone()), Query(PageParams::default()))
            .await
            .unwrap();
        assert_eq!(listing.total, 1);
        assert_eq!(listing.items[0].status.as_deref(), Some("completed"));

        reset_study_sessions(State(db.pool.clone())).await.unwrap();
        let mut conn = db.conn();
        let remaining: i64 = study_sessions::table.count().get_result(&mut conn).unwrap();
        assert_eq!(remaining, 0);
    }
}
