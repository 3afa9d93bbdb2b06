// URL handling utilities
pub mod url_builder;
pub mod query_string;

// JSON utilities
pub mod json_converter;

pub use url_builder::join_url;
pub use query_string::{build_query_string, append_query};
pub use json_converter::scalar_to_query_value;
