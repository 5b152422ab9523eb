pub mod api_error;
pub mod review_models;
pub mod session_models;

pub use api_error::ApiError;
pub use review_models::{NewStudySessionReview, ReviewRequest, StudySessionReview};
pub use session_models::{
    ApiResponse, CreatedStudySession, PageParams, SessionRow, SessionWord, StudySessionDetail,
    StudySessionPage, StudySessionSummary,
};
