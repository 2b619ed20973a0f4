use std::panic::Location;

use error_location::ErrorLocation;
use iam_core::CoreError;
use thiserror::Error;

const NOT_FOUND: u16 = 404;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {status} {message} ({url}) {location}")]
    Status {
        status: u16,
        message: String,
        url: String,
        location: ErrorLocation,
    },

    #[error("{url} response is not JSON (content-type: '{content_type}') {location}")]
    NotJson {
        url: String,
        content_type: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid URL '{url}': {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an error for a non-2xx response
    #[track_caller]
    pub fn status(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        ClientError::Status {
            status,
            message: message.into(),
            url: url.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an error for a response that is not `application/json`
    #[track_caller]
    pub fn not_json(url: impl Into<String>, content_type: impl Into<String>) -> Self {
        ClientError::NotJson {
            url: url.into(),
            content_type: content_type.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a response shape error
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an invalid URL error
    #[track_caller]
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::InvalidUrl {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status code, if the server answered with a non-2xx status
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.http_status() == Some(NOT_FOUND)
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        ClientError::validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
