pub mod error;
pub mod models;
pub mod query_params;
pub mod validation;
pub mod wire;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::paged_data::PagedData;
pub use models::role::Role;
pub use models::user::User;
pub use models::user_record::UserRecord;
pub use query_params::{
    ListOptions, PAGE_QUERY_PARAM, SEARCH_QUERY_PARAM, parse_page_query_param,
    parse_search_query_param,
};
pub use validation::Validate;

/// Role name shown for users whose role could not be resolved.
pub const UNKNOWN_ROLE_NAME: &str = "Unknown";
