//! User as returned by the users endpoints, before the role join.

use crate::validation::{Validate, require_non_empty, require_url, trimmed_non_empty};
use crate::CoreResult;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(deserialize_with = "crate::wire::uuid")]
    pub id: Uuid,
    #[serde(deserialize_with = "crate::wire::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::wire::timestamp")]
    pub updated_at: DateTime<Utc>,
    pub first: String,
    pub last: String,
    #[serde(deserialize_with = "crate::wire::uuid")]
    pub role_id: Uuid,
    /// Avatar URL
    pub photo: String,
}

impl Validate for UserRecord {
    fn validate(&self) -> CoreResult<()> {
        require_non_empty("user.first", &self.first)?;
        require_non_empty("user.last", &self.last)?;
        require_url("user.photo", &self.photo)?;
        Ok(())
    }

    fn into_validated(self) -> CoreResult<Self> {
        let record = Self {
            first: trimmed_non_empty("user.first", self.first)?,
            last: trimmed_non_empty("user.last", self.last)?,
            photo: self.photo.trim().to_string(),
            ..self
        };
        require_url("user.photo", &record.photo)?;
        Ok(record)
    }
}
