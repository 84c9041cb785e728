//! Storefront content entities: banners and keyed text blocks

use crate::core::entity::Entity;
use crate::core::error::{AdminError, AdminResult};
use crate::core::field::FieldFormat;
use serde::{Deserialize, Serialize};

/// A hero banner shown on the storefront
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: u64,
    pub image_url: String,
    pub title: String,
    pub subtitle: String,
}

impl Entity for Banner {
    type Id = u64;

    fn resource_name() -> &'static str {
        "banners"
    }

    fn entity_name() -> &'static str {
        "Banner"
    }

    fn id(&self) -> u64 {
        self.id
    }
}

/// Payload for creating a banner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerDraft {
    pub image_url: String,
    pub title: String,
    pub subtitle: String,
}

impl BannerDraft {
    pub fn validate(&self) -> AdminResult<()> {
        if !FieldFormat::Url.validate(&self.image_url) {
            return Err(AdminError::validation("imageUrl", "must be a valid URL"));
        }
        if self.title.trim().is_empty() {
            return Err(AdminError::validation("title", "must not be empty"));
        }
        Ok(())
    }

    pub fn into_banner(self, id: u64) -> Banner {
        Banner {
            id,
            image_url: self.image_url,
            title: self.title,
            subtitle: self.subtitle,
        }
    }
}

/// A keyed text block rendered somewhere on the storefront
///
/// The set of keys is fixed by the storefront; the settings page edits the
/// values and writes them back as a whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub key: String,
    pub label: String,
    pub value: String,
}

impl Entity for ContentBlock {
    type Id = String;

    fn resource_name() -> &'static str {
        "content"
    }

    fn entity_name() -> &'static str {
        "ContentBlock"
    }

    fn id(&self) -> String {
        self.key.clone()
    }
}
