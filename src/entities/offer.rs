//! Promotional offer entity

use crate::core::entity::Entity;
use crate::core::error::{AdminError, AdminResult};
use serde::{Deserialize, Serialize};

/// A promotional offer with its promo code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub promo_code: String,
}

impl Entity for Offer {
    type Id = u64;

    fn resource_name() -> &'static str {
        "offers"
    }

    fn entity_name() -> &'static str {
        "Offer"
    }

    fn id(&self) -> u64 {
        self.id
    }
}

/// Payload for creating or updating an offer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDraft {
    pub title: String,
    pub description: String,
    pub promo_code: String,
}

impl OfferDraft {
    pub fn validate(&self) -> AdminResult<()> {
        if self.title.trim().is_empty() {
            return Err(AdminError::validation("title", "must not be empty"));
        }
        if self.promo_code.trim().is_empty() {
            return Err(AdminError::validation("promoCode", "must not be empty"));
        }
        Ok(())
    }

    pub fn into_offer(self, id: u64) -> Offer {
        Offer {
            id,
            title: self.title,
            description: self.description,
            promo_code: self.promo_code,
        }
    }
}
