//! HTTP exposure for the admin back office
//!
//! This module is the only place that knows about axum. It consumes the
//! services and produces a `Router`; everything below it is transport
//! agnostic and can be driven just as well by the in-process
//! [`crate::client::ListController`].

pub mod handlers;

use crate::config::AdminConfig;
use crate::core::entity::IdSequence;
use crate::services::{
    CatalogService, ContentService, MockAuthProvider, OfferService, OrderService, ReportService,
};
use crate::storage::in_memory::InMemoryStore;
use crate::storage::seed;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AdminConfig>,
    pub catalog: CatalogService,
    pub orders: OrderService,
    pub offers: OfferService,
    pub content: ContentService,
    pub reports: ReportService,
    pub auth: Arc<MockAuthProvider>,
}

impl AppState {
    /// State over empty stores; ids start at 1
    pub fn empty(config: AdminConfig) -> Self {
        Self::build(
            config,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            [1, 1, 1, 1, 1],
        )
    }

    /// State preloaded with the demo fixture data
    pub fn seeded(config: AdminConfig) -> Self {
        Self::build(
            config,
            seed::products(),
            seed::categories(),
            seed::orders(),
            seed::offers(),
            seed::banners(),
            seed::content_blocks(),
            seed::users(),
            [
                seed::NEXT_PRODUCT_ID,
                seed::NEXT_CATEGORY_ID,
                seed::NEXT_ORDER_NUMBER,
                seed::NEXT_OFFER_ID,
                seed::NEXT_BANNER_ID,
            ],
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        config: AdminConfig,
        products: Vec<crate::entities::Product>,
        categories: Vec<crate::entities::Category>,
        orders: Vec<crate::entities::Order>,
        offers: Vec<crate::entities::Offer>,
        banners: Vec<crate::entities::Banner>,
        blocks: Vec<crate::entities::ContentBlock>,
        users: Vec<crate::entities::User>,
        next_ids: [u64; 5],
    ) -> Self {
        // The report service reads the same stores the mutating services
        // write, so every dashboard number reflects live data.
        let products = Arc::new(InMemoryStore::with_entities(products));
        let categories = Arc::new(InMemoryStore::with_entities(categories));
        let orders = Arc::new(InMemoryStore::with_entities(orders));
        let offers = Arc::new(InMemoryStore::with_entities(offers));
        let banners = Arc::new(InMemoryStore::with_entities(banners));
        let blocks = Arc::new(InMemoryStore::with_entities(blocks));
        let users = Arc::new(InMemoryStore::with_entities(users));
        let [next_product, next_category, next_order, next_offer, next_banner] = next_ids;

        AppState {
            config: Arc::new(config),
            catalog: CatalogService::new(
                products.clone(),
                categories.clone(),
                Arc::new(IdSequence::starting_at(next_product)),
                Arc::new(IdSequence::starting_at(next_category)),
            ),
            orders: OrderService::new(
                orders.clone(),
                Arc::new(IdSequence::starting_at(next_order)),
            ),
            offers: OfferService::new(offers, Arc::new(IdSequence::starting_at(next_offer))),
            content: ContentService::new(
                banners,
                blocks,
                users.clone(),
                Arc::new(IdSequence::starting_at(next_banner)),
            ),
            reports: ReportService::new(products, categories, orders),
            auth: Arc::new(MockAuthProvider::new(users)),
        }
    }
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(handlers::api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "backoffice"
    }))
}
