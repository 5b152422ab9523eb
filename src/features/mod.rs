pub mod study_sessions;
