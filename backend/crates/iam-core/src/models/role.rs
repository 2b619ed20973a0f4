//! Role entity - a named permission set users are assigned to.

use crate::validation::{Validate, require_non_empty, trimmed_non_empty};
use crate::CoreResult;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(deserialize_with = "crate::wire::uuid")]
    pub id: Uuid,
    #[serde(deserialize_with = "crate::wire::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::wire::timestamp")]
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub description: String,
    /// Role assigned to new users when none is given
    pub is_default: bool,
}

impl Validate for Role {
    fn validate(&self) -> CoreResult<()> {
        require_non_empty("role.name", &self.name)?;
        require_non_empty("role.description", &self.description)?;
        Ok(())
    }

    fn into_validated(self) -> CoreResult<Self> {
        Ok(Self {
            name: trimmed_non_empty("role.name", self.name)?,
            description: trimmed_non_empty("role.description", self.description)?,
            ..self
        })
    }
}
