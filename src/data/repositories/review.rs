use diesel::prelude::*;

use crate::data::models::{NewStudySessionReview, StudySessionReview};
use crate::data::repositories::study_session::last_insert_id;
use crate::schema::study_session_reviews;

pub struct StudySessionReviewRepository;

impl StudySessionReviewRepository {
    /// Fails with a unique violation when the session already has a review.
    pub fn create(
        conn: &mut SqliteConnection,
        review: &NewStudySessionReview<'_>,
    ) -> QueryResult<StudySessionReview> {
        diesel::insert_into(study_session_reviews::table)
            .values(review)
            .execute(conn)?;

        let id = last_insert_id(conn)?;
        study_session_reviews::table
            .find(id)
            .select(StudySessionReview::as_select())
            .first(conn)
    }
}
