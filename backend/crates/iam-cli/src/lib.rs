//! iam-cli library
//!
//! HTTP client for the IAM users/roles REST API: retrying JSON fetches,
//! response validation, and short-lived by-id caches for users and roles.

pub mod client;
pub mod logger;
pub mod retry;
pub mod ttl_cache;


pub use client::{CliClientResult, Client, ClientError};
pub use retry::{RetryPolicy, with_retry, with_retry_if};
pub use ttl_cache::TtlCache;
