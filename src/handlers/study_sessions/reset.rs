use axum::extract::{Json, State};
use diesel::Connection;

use crate::{
    data::models::{ApiError, ApiResponse},
    data::repositories::StudySessionRepository,
    db::{self, DbPool},
};

/// Irreversibly removes every session along with its review items and review.
pub async fn reset_study_sessions(
    State(pool): State<DbPool>,
) -> Result<Json<ApiResponse>, ApiError> {
    let (items, sessions) = db::interact(&pool, |conn| {
        conn.transaction::<_, ApiError, _>(|conn| {
            StudySessionRepository::delete_all(conn).map_err(ApiError::from)
        })
    })
    .await?;

    log::warn!(
        "Study history reset: removed {} sessions and {} review items",
        sessions,
        items
    );
    Ok(Json(ApiResponse {
        success: true,
        message: "Study history cleared successfully".to_string(),
    }))
}
