pub mod paged_data;
pub mod role;
pub mod user;
pub mod user_record;
