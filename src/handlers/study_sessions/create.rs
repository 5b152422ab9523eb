use axum::extract::{Json, State};
use diesel::Connection;

use crate::{
    data::models::{ApiError, CreatedStudySession},
    data::repositories::StudySessionRepository,
    db::{self, DbPool},
    features::study_sessions::validation,
    utils::JsonBody,
};

#[axum::debug_handler]
pub async fn create_study_session(
    State(pool): State<DbPool>,
    JsonBody(body): JsonBody,
) -> Result<Json<CreatedStudySession>, ApiError> {
    let fields = validation::require_object(&body)?;
    let group_id = validation::coerced_id_field(fields, "group_id")?;
    let study_activity_id = validation::coerced_id_field(fields, "study_activity_id")?;

    let session = db::interact(&pool, move |conn| {
        if !StudySessionRepository::group_exists(conn, group_id)? {
            return Err(ApiError::NotFound(format!(
                "Group with id {} does not exist",
                group_id
            )));
        }

        if !StudySessionRepository::activity_exists(conn, study_activity_id)? {
            return Err(ApiError::NotFound(format!(
                "Study activity with id {} does not exist",
                study_activity_id
            )));
        }

        conn.transaction::<_, ApiError, _>(|conn| {
            let id = StudySessionRepository::create(conn, group_id, study_activity_id)?;
            StudySessionRepository::find_summary(conn, id)?
                .ok_or_else(|| ApiError::Internal("Failed to create study session".into()))
        })
    })
    .await?;

    log::info!(
        "Created study session {} (group {}, activity {})",
        session.id,
        group_id,
        study_activity_id
    );
    Ok(Json(CreatedStudySession::from(session)))
}
