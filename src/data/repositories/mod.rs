pub mod review;
pub mod study_session;

pub use review::StudySessionReviewRepository;
pub use study_session::StudySessionRepository;
