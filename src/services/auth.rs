//! Mock identity provider
//!
//! Stands in for the real identity collaborator during development: any user
//! in the store with the fixed development password can log in, and tokens
//! are opaque strings that resolve back to the user id. Nothing here is a
//! security boundary.

use crate::core::auth::{AuthContext, AuthProvider};
use crate::core::error::{AdminError, AdminResult};
use crate::entities::User;
use crate::storage::EntityStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

const DEV_PASSWORD: &str = "password";
const TOKEN_PREFIX: &str = "mock-token";

/// Token-minting provider over the user store
#[derive(Clone)]
pub struct MockAuthProvider {
    users: Arc<dyn EntityStore<User>>,
}

impl MockAuthProvider {
    pub fn new(users: Arc<dyn EntityStore<User>>) -> Self {
        MockAuthProvider { users }
    }

    async fn find_by_email(&self, email: &str) -> AdminResult<Option<User>> {
        let needle = email.to_lowercase();
        Ok(self
            .users
            .list()
            .await?
            .into_iter()
            .find(|u| u.email.to_lowercase() == needle))
    }

    async fn context_for(&self, user_id: u64) -> AdminResult<AuthContext> {
        let user = self
            .users
            .get(&user_id)
            .await?
            .ok_or_else(|| AdminError::not_found("User", user_id))?;
        Ok(AuthContext {
            user_id: user.id,
            role: user.role,
        })
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn login(&self, email: &str, password: &str) -> AdminResult<(AuthContext, String)> {
        let user = self.find_by_email(email).await?;
        match user {
            Some(user) if password == DEV_PASSWORD => {
                debug!(user_id = user.id, "login succeeded");
                let token = format!("{TOKEN_PREFIX}-{}-{}", user.id, Uuid::new_v4());
                let ctx = AuthContext {
                    user_id: user.id,
                    role: user.role,
                };
                Ok((ctx, token))
            }
            _ => Err(AdminError::validation(
                "credentials",
                "invalid email or password",
            )),
        }
    }

    async fn authenticate(&self, token: &str) -> AdminResult<AuthContext> {
        let rest = token
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|r| r.strip_prefix('-'));
        let user_id = rest
            .and_then(|r| r.split('-').next())
            .and_then(|id| id.parse::<u64>().ok())
            .ok_or_else(|| {
                AdminError::validation("token", "invalid or expired session token")
            })?;
        self.context_for(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::Role;
    use crate::storage::in_memory::InMemoryStore;
    use crate::storage::seed;

    fn provider() -> MockAuthProvider {
        MockAuthProvider::new(Arc::new(InMemoryStore::with_entities(seed::users())))
    }

    #[tokio::test]
    async fn test_login_round_trip() {
        let auth = provider();
        let (ctx, token) = auth.login("admin@example.com", "password").await.unwrap();
        assert_eq!(ctx.role, Role::Admin);

        let resolved = auth.authenticate(&token).await.unwrap();
        assert_eq!(resolved.user_id, ctx.user_id);
    }

    #[tokio::test]
    async fn test_login_is_case_insensitive_on_email() {
        let auth = provider();
        assert!(auth.login("ADMIN@example.com", "password").await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let auth = provider();
        assert!(auth.login("admin@example.com", "hunter2").await.is_err());
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let auth = provider();
        assert!(auth.authenticate("not-a-token").await.is_err());
    }
}
