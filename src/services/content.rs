//! Storefront content service: banners, text blocks, and user profiles

use crate::core::entity::IdSequence;
use crate::core::error::{AdminError, AdminResult};
use crate::entities::{Banner, BannerDraft, ContentBlock, User, UserProfileDraft};
use crate::storage::EntityStore;
use std::sync::Arc;

/// Service over the storefront-content stores
#[derive(Clone)]
pub struct ContentService {
    banners: Arc<dyn EntityStore<Banner>>,
    blocks: Arc<dyn EntityStore<ContentBlock>>,
    users: Arc<dyn EntityStore<User>>,
    banner_ids: Arc<IdSequence>,
}

impl ContentService {
    pub fn new(
        banners: Arc<dyn EntityStore<Banner>>,
        blocks: Arc<dyn EntityStore<ContentBlock>>,
        users: Arc<dyn EntityStore<User>>,
        banner_ids: Arc<IdSequence>,
    ) -> Self {
        ContentService {
            banners,
            blocks,
            users,
            banner_ids,
        }
    }

    // === Banners ===

    /// All banners, newest first
    pub async fn list_banners(&self) -> AdminResult<Vec<Banner>> {
        let mut banners = self.banners.list().await?;
        banners.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(banners)
    }

    pub async fn create_banner(&self, draft: BannerDraft) -> AdminResult<Banner> {
        draft.validate()?;
        let banner = draft.into_banner(self.banner_ids.next_id());
        self.banners.insert(banner).await
    }

    pub async fn delete_banner(&self, id: u64) -> AdminResult<()> {
        self.banners.delete(&id).await
    }

    // === Text blocks ===

    /// All content blocks in store order
    pub async fn list_blocks(&self) -> AdminResult<Vec<ContentBlock>> {
        self.blocks.list().await
    }

    /// Replace the value of every submitted block; unknown keys are rejected
    /// so the settings page can't invent new storefront slots
    pub async fn replace_blocks(&self, blocks: Vec<ContentBlock>) -> AdminResult<Vec<ContentBlock>> {
        for block in &blocks {
            if self.blocks.get(&block.key).await?.is_none() {
                return Err(AdminError::not_found("ContentBlock", &block.key));
            }
        }
        for block in blocks {
            let key = block.key.clone();
            self.blocks.update(&key, block).await?;
        }
        self.list_blocks().await
    }

    // === Users ===

    pub async fn get_user(&self, id: u64) -> AdminResult<User> {
        self.users
            .get(&id)
            .await?
            .ok_or_else(|| AdminError::not_found("User", id))
    }

    /// Update a user's profile fields; role and id are untouched
    pub async fn update_profile(&self, id: u64, draft: UserProfileDraft) -> AdminResult<User> {
        draft.validate()?;
        let mut user = self.get_user(id).await?;
        user.name = draft.name;
        user.email = draft.email;
        self.users.update(&id, user).await
    }
}
