//! User entity with its role name resolved.

use crate::validation::{Validate, require_non_empty, trimmed_non_empty};
use crate::{CoreResult, UserRecord};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user joined with the display name of its role.
/// Built from a [`UserRecord`] once the role lookup has completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
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
    pub photo: String,
    /// Resolved role name
    pub role: String,
}

impl User {
    /// Attach a resolved role name to a fetched record
    pub fn from_record(record: UserRecord, role: impl Into<String>) -> Self {
        Self {
            id: record.id,
            created_at: record.created_at,
            updated_at: record.updated_at,
            first: record.first,
            last: record.last,
            role_id: record.role_id,
            photo: record.photo,
            role: role.into(),
        }
    }

    /// The record this user was built from
    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            first: self.first.clone(),
            last: self.last.clone(),
            role_id: self.role_id,
            photo: self.photo.clone(),
        }
    }
}

impl Validate for User {
    fn validate(&self) -> CoreResult<()> {
        self.to_record().validate()?;
        require_non_empty("user.role", &self.role)
    }

    fn into_validated(self) -> CoreResult<Self> {
        let role = trimmed_non_empty("user.role", self.role.clone())?;
        let record = self.to_record().into_validated()?;
        Ok(Self::from_record(record, role))
    }
}
