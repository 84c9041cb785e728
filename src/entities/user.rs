//! Back-office user entity

use crate::core::auth::Role;
use crate::core::entity::Entity;
use crate::core::error::{AdminError, AdminResult};
use crate::core::field::FieldFormat;
use serde::{Deserialize, Serialize};

/// A back-office user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Entity for User {
    type Id = u64;

    fn resource_name() -> &'static str {
        "users"
    }

    fn entity_name() -> &'static str {
        "User"
    }

    fn id(&self) -> u64 {
        self.id
    }
}

/// Profile fields a user may change from the settings page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDraft {
    pub name: String,
    pub email: String,
}

impl UserProfileDraft {
    pub fn validate(&self) -> AdminResult<()> {
        if self.name.trim().is_empty() {
            return Err(AdminError::validation("name", "must not be empty"));
        }
        if !FieldFormat::Email.validate(&self.email) {
            return Err(AdminError::validation(
                "email",
                "must be a valid email address",
            ));
        }
        Ok(())
    }
}
