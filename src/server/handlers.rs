//! REST handlers for the admin API
//!
//! Thin translation layer: query strings become [`ListQuery`] values, JSON
//! bodies become drafts, and service errors map to status codes through
//! [`AdminError`]'s `IntoResponse`.

use super::AppState;
use crate::core::auth::{AuthContext, AuthProvider};
use crate::core::error::{AdminError, AdminResult};
use crate::core::query::{ListQuery, SortDirection, SortSpec};
use crate::entities::{
    BannerDraft, CategoryDraft, ContentBlock, OfferDraft, OrderDraft, OrderStatus, ProductDraft,
    UserProfileDraft,
};
use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

/// Query-string shape of a list request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ListParams {
    fn into_query(self, default_per_page: usize) -> ListQuery {
        let sort = self.sort_by.map(|key| SortSpec {
            key,
            direction: match self.sort_order.as_deref() {
                Some("desc") => SortDirection::Descending,
                _ => SortDirection::Ascending,
            },
        });
        ListQuery {
            search: self.search,
            sort,
            page: self.page.unwrap_or(1),
            per_page: self.limit.unwrap_or(default_per_page),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: crate::entities::User,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// All `/api` routes
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/products/{id}/featured", patch(toggle_featured))
        .route("/api/categories", get(list_categories).post(create_category))
        .route(
            "/api/categories/{id}",
            axum::routing::put(update_category).delete(delete_category),
        )
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/status", patch(update_order_status))
        .route("/api/offers", get(list_offers).post(create_offer))
        .route(
            "/api/offers/{id}",
            axum::routing::put(update_offer).delete(delete_offer),
        )
        .route("/api/banners", get(list_banners).post(create_banner))
        .route("/api/banners/{id}", axum::routing::delete(delete_banner))
        .route(
            "/api/website/content",
            get(list_content).put(replace_content),
        )
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(current_user))
        .route("/api/users/{id}", patch(update_profile))
        .route("/api/dashboard/stats", get(dashboard_stats))
        .route(
            "/api/reports/category-distribution",
            get(category_distribution),
        )
        .route("/api/reports/monthly-sales", get(monthly_sales))
        .route("/api/reports/top-sellers", get(top_sellers))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_for_mutations,
        ))
        .with_state(state)
}

/// The single role check: every mutating request must carry an admin token
///
/// Reads stay open (the storefront consumes them), and login is exempt
/// because it is how a token is obtained in the first place.
async fn require_admin_for_mutations(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mutating = matches!(
        *request.method(),
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    );
    if !mutating || request.uri().path() == "/api/auth/login" {
        return next.run(request).await;
    }

    match admin_context(&state, request.headers()).await {
        Ok(_) => next.run(request).await,
        Err(err) => err.into_response(),
    }
}

async fn admin_context(state: &AppState, headers: &HeaderMap) -> AdminResult<AuthContext> {
    let context = authenticate(state, headers).await?;
    context.require_admin()?;
    Ok(context)
}

// === Products ===

async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AdminResult<impl IntoResponse> {
    let query = params.into_query(state.config.default_per_page);
    Ok(Json(state.catalog.list_products(&query).await?))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.catalog.get_product(id).await?))
}

async fn create_product(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> AdminResult<impl IntoResponse> {
    let product = state.catalog.create_product(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(draft): Json<ProductDraft>,
) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.catalog.update_product(id, draft).await?))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AdminResult<impl IntoResponse> {
    state.catalog.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn toggle_featured(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.catalog.toggle_featured(id).await?))
}

// === Categories ===

async fn list_categories(State(state): State<AppState>) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.catalog.list_categories().await?))
}

async fn create_category(
    State(state): State<AppState>,
    Json(draft): Json<CategoryDraft>,
) -> AdminResult<impl IntoResponse> {
    let category = state.catalog.create_category(draft).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(draft): Json<CategoryDraft>,
) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.catalog.update_category(id, draft).await?))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AdminResult<impl IntoResponse> {
    state.catalog.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// === Orders ===

async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AdminResult<impl IntoResponse> {
    let query = params.into_query(state.config.default_per_page);
    Ok(Json(state.orders.list_orders(&query).await?))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.orders.get_order(&id).await?))
}

async fn create_order(
    State(state): State<AppState>,
    Json(draft): Json<OrderDraft>,
) -> AdminResult<impl IntoResponse> {
    let order = state.orders.create_order(draft).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.orders.update_status(&id, body.status).await?))
}

// === Offers ===

async fn list_offers(State(state): State<AppState>) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.offers.list_offers().await?))
}

async fn create_offer(
    State(state): State<AppState>,
    Json(draft): Json<OfferDraft>,
) -> AdminResult<impl IntoResponse> {
    let offer = state.offers.create_offer(draft).await?;
    Ok((StatusCode::CREATED, Json(offer)))
}

async fn update_offer(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(draft): Json<OfferDraft>,
) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.offers.update_offer(id, draft).await?))
}

async fn delete_offer(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AdminResult<impl IntoResponse> {
    state.offers.delete_offer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// === Storefront content ===

async fn list_banners(State(state): State<AppState>) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.content.list_banners().await?))
}

async fn create_banner(
    State(state): State<AppState>,
    Json(draft): Json<BannerDraft>,
) -> AdminResult<impl IntoResponse> {
    let banner = state.content.create_banner(draft).await?;
    Ok((StatusCode::CREATED, Json(banner)))
}

async fn delete_banner(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AdminResult<impl IntoResponse> {
    state.content.delete_banner(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_content(State(state): State<AppState>) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.content.list_blocks().await?))
}

async fn replace_content(
    State(state): State<AppState>,
    Json(blocks): Json<Vec<ContentBlock>>,
) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.content.replace_blocks(blocks).await?))
}

// === Auth and users ===

async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AdminResult<impl IntoResponse> {
    let (context, token) = state.auth.login(&body.email, &body.password).await?;
    let user = state.content.get_user(context.user_id).await?;
    Ok(Json(LoginResponse { token, user }))
}

async fn current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AdminResult<impl IntoResponse> {
    let context = authenticate(&state, &headers).await?;
    Ok(Json(state.content.get_user(context.user_id).await?))
}

async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(draft): Json<UserProfileDraft>,
) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.content.update_profile(id, draft).await?))
}

// === Reports ===

async fn dashboard_stats(State(state): State<AppState>) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.reports.dashboard_stats().await?))
}

async fn category_distribution(State(state): State<AppState>) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.reports.category_distribution().await?))
}

async fn monthly_sales(State(state): State<AppState>) -> AdminResult<impl IntoResponse> {
    Ok(Json(state.reports.monthly_sales().await?))
}

#[derive(Debug, Deserialize)]
pub struct TopSellersParams {
    pub limit: Option<usize>,
}

async fn top_sellers(
    State(state): State<AppState>,
    Query(params): Query<TopSellersParams>,
) -> AdminResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(5);
    Ok(Json(state.reports.top_sellers(limit).await?))
}

/// Resolve the `Authorization: Bearer` header into an auth context
async fn authenticate(state: &AppState, headers: &HeaderMap) -> AdminResult<AuthContext> {
    let token = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AdminError::validation("authorization", "missing bearer token"))?;
    state.auth.authenticate(token).await
}
