use axum::extract::{Json, Query, State};
use diesel::Connection;

use crate::{
    data::models::{ApiError, PageParams, StudySessionPage, StudySessionSummary},
    data::repositories::StudySessionRepository,
    db::{self, DbPool},
    utils::Pagination,
};

pub async fn list_study_sessions(
    State(pool): State<DbPool>,
    Query(params): Query<PageParams>,
) -> Result<Json<StudySessionPage>, ApiError> {
    let pagination = Pagination::from_params(&params);
    let (total, rows) = db::interact(&pool, move |conn| {
        conn.transaction::<_, ApiError, _>(|conn| {
            let total = StudySessionRepository::count(conn)?;
            let rows =
                StudySessionRepository::list_page(conn, pagination.per_page, pagination.offset())?;
            Ok((total, rows))
        })
    })
    .await?;

    Ok(Json(StudySessionPage {
        items: rows.into_iter().map(StudySessionSummary::from).collect(),
        total,
        page: pagination.page,
        per_page: pagination.per_page,
        total_pages: pagination.total_pages(total),
    }))
}
