//! Offer service

use crate::core::entity::IdSequence;
use crate::core::error::AdminResult;
use crate::entities::{Offer, OfferDraft};
use crate::storage::EntityStore;
use std::sync::Arc;

/// Service over the offer store
#[derive(Clone)]
pub struct OfferService {
    offers: Arc<dyn EntityStore<Offer>>,
    offer_ids: Arc<IdSequence>,
}

impl OfferService {
    pub fn new(offers: Arc<dyn EntityStore<Offer>>, offer_ids: Arc<IdSequence>) -> Self {
        OfferService { offers, offer_ids }
    }

    /// All offers, newest first
    pub async fn list_offers(&self) -> AdminResult<Vec<Offer>> {
        let mut offers = self.offers.list().await?;
        offers.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(offers)
    }

    pub async fn create_offer(&self, draft: OfferDraft) -> AdminResult<Offer> {
        draft.validate()?;
        let offer = draft.into_offer(self.offer_ids.next_id());
        self.offers.insert(offer).await
    }

    pub async fn update_offer(&self, id: u64, draft: OfferDraft) -> AdminResult<Offer> {
        draft.validate()?;
        self.offers.update(&id, draft.into_offer(id)).await
    }

    pub async fn delete_offer(&self, id: u64) -> AdminResult<()> {
        self.offers.delete(&id).await
    }
}
