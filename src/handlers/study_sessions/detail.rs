use axum::extract::{Json, Path, Query, State};
use diesel::Connection;

use crate::{
    data::models::{ApiError, PageParams, StudySessionDetail},
    data::repositories::StudySessionRepository,
    db::{self, DbPool},
    utils::Pagination,
};

fn session_not_found() -> ApiError {
    ApiError::NotFound("Study session not found".into())
}

pub async fn get_study_session(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<StudySessionDetail>, ApiError> {
    let id = id.trim().parse::<i32>().map_err(|_| session_not_found())?;
    let pagination = Pagination::from_params(&params);
    let (session, words, total) = db::interact(&pool, move |conn| {
        conn.transaction::<_, ApiError, _>(|conn| {
            let session =
                StudySessionRepository::find_summary(conn, id)?.ok_or_else(session_not_found)?;
            let words = StudySessionRepository::session_words(
                conn,
                id,
                pagination.per_page,
                pagination.offset(),
            )?;
            let total = StudySessionRepository::count_session_words(conn, id)?;
            Ok((session, words, total))
        })
    })
    .await?;

    Ok(Json(StudySessionDetail {
        session: session.into(),
        words,
        total,
        page: pagination.page,
        per_page: pagination.per_page,
        total_pages: pagination.total_pages(total),
    }))
}
