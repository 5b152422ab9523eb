// Table definitions for the study-tracking database.

diesel::table! {
    groups (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    study_activities (id) {
        id -> Integer,
        name -> Text,
        url -> Nullable<Text>,
    }
}

diesel::table! {
    study_session_reviews (id) {
        id -> Integer,
        session_id -> Integer,
        rating -> Integer,
        feedback -> Nullable<Text>,
        completion_status -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    study_sessions (id) {
        id -> Integer,
        group_id -> Integer,
        study_activity_id -> Integer,
        created_at -> Timestamp,
        status -> Nullable<Text>,
    }
}

diesel::table! {
    word_review_items (id) {
        id -> Integer,
        word_id -> Integer,
        study_session_id -> Integer,
        correct -> Bool,
    }
}

diesel::table! {
    words (id) {
        id -> Integer,
        kanji -> Text,
        romaji -> Text,
        english -> Text,
        parts -> Nullable<Text>,
    }
}

diesel::joinable!(study_session_reviews -> study_sessions (session_id));
diesel::joinable!(study_sessions -> groups (group_id));
diesel::joinable!(study_sessions -> study_activities (study_activity_id));
diesel::joinable!(word_review_items -> study_sessions (study_session_id));
diesel::joinable!(word_review_items -> words (word_id));

diesel::allow_tables_to_appear_in_same_query!(
    groups,
    study_activities,
    study_session_reviews,
    study_sessions,
    word_review_items,
    words,
);
