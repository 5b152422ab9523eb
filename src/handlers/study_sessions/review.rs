use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use diesel::Connection;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use validator::Validate;

use crate::{
    data::models::{ApiError, NewStudySessionReview, StudySessionReview},
    data::repositories::{StudySessionRepository, StudySessionReviewRepository},
    db::{self, DbPool},
    features::study_sessions::validation,
    utils::JsonBody,
};

#[axum::debug_handler]
pub async fn create_study_session_review(
    State(pool): State<DbPool>,
    Path(session_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<StudySessionReview>), ApiError> {
    let not_found = format!("Study session with id {} not found", session_id);
    let id = match session_id.trim().parse::<i32>() {
        Ok(id) => id,
        Err(_) => return Err(ApiError::NotFound(not_found)),
    };

    let review = db::interact(&pool, move |conn| {
        if !StudySessionRepository::session_exists(conn, id)? {
            return Err(ApiError::NotFound(not_found));
        }

        let fields = validation::require_object(&body)?;
        let request = validation::strict_review_request(fields)?;
        request.validate()?;
        let status = request.status().ok_or_else(|| {
            ApiError::Internal("completion status passed validation but did not parse".into())
        })?;

        conn.transaction::<_, ApiError, _>(|conn| {
            StudySessionRepository::set_status(conn, id, status.as_str())?;

            let new_review = NewStudySessionReview {
                session_id: id,
                // validated to 1..=5
                rating: request.rating as i32,
                feedback: request.feedback.as_deref(),
                completion_status: status.as_str(),
            };
            StudySessionReviewRepository::create(conn, &new_review).map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    ApiError::Conflict("Study session already has a review".into())
                }
                other => ApiError::from(other),
            })
        })
    })
    .await?;

    log::info!(
        "Recorded review {} for study session {} ({}, rating {})",
        review.id,
        id,
        review.completion_status,
        review.rating
    );
    Ok((StatusCode::CREATED, Json(review)))
}
