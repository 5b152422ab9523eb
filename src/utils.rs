pub mod json_body;
pub mod pagination;

pub use json_body::JsonBody;
pub use pagination::Pagination;
