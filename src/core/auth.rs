//! Authentication seam
//!
//! The back office consumes an authenticated identity from a collaborator; it
//! does not own session storage. [`AuthProvider`] is the seam a real identity
//! service plugs into. The only policy enforced in-core is a single role
//! check: mutations require the Admin role.

use crate::core::error::{AdminError, AdminResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Back-office user role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Editor,
}

/// Authenticated identity attached to a request
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: u64,
    pub role: Role,
}

impl AuthContext {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Fail with Conflict unless the caller holds the Admin role
    pub fn require_admin(&self) -> AdminResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AdminError::Conflict(
                "this action requires the Admin role".to_string(),
            ))
        }
    }
}

/// Identity collaborator interface
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Validate credentials and mint a session token
    async fn login(&self, email: &str, password: &str) -> AdminResult<(AuthContext, String)>;

    /// Resolve a session token back to an identity
    async fn authenticate(&self, token: &str) -> AdminResult<AuthContext>;
}
