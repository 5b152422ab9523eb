pub mod error_conversions;
pub mod error_responses;
pub mod validation;

pub use error_responses::panic_response;
