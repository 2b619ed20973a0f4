mod paged_data;
mod role;
mod user;
