use diesel::result::{DatabaseErrorKind, Error as DieselError};
use validator::ValidationErrors;

use crate::data::models::ApiError;

impl From<DieselError> for ApiError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation,
                info,
            ) => ApiError::Integrity(info.message().to_string()),
            other => ApiError::Database(other),
        }
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        ApiError::Pool(err)
    }
}

/// Review fields are reported in a fixed order so the first failing one wins.
const REVIEW_FIELD_ORDER: [&str; 2] = ["rating", "completion_status"];

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        let field_errors = err.field_errors();
        let message = REVIEW_FIELD_ORDER
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .chain(field_errors.values())
            .flat_map(|errors| errors.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()));

        ApiError::BadRequest(message.unwrap_or_else(|| err.to_string()))
    }
}
