//! End-to-end tests over the seeded REST API
//!
//! Every test boots a fresh in-memory state, so tests are independent and
//! order-insensitive. Mutating requests carry the admin bearer token
//! obtained through the login endpoint.

use axum_test::TestServer;
use backoffice::config::AdminConfig;
use backoffice::server::{AppState, build_router};
use serde_json::{Value, json};

fn test_server() -> TestServer {
    let state = AppState::seeded(AdminConfig::default());
    TestServer::new(build_router(state))
}

async fn admin_token(server: &TestServer) -> String {
    let body: Value = server
        .post("/api/auth/login")
        .json(&json!({ "email": "admin@example.com", "password": "password" }))
        .await
        .json();
    body["token"].as_str().unwrap().to_string()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

// =============================================================================
// Product listing: search, sort, paginate
// =============================================================================

#[tokio::test]
async fn test_list_products_default_page() {
    let server = test_server();
    let response = server.get("/api/products").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["totalCount"], 17);
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["totalPages"], 4);
    assert_eq!(body["pagination"]["hasNext"], true);
    assert_eq!(body["pagination"]["hasPrev"], false);
    // Rows carry the resolved category name.
    assert_eq!(body["items"][0]["name"], "Wireless Mouse");
    assert_eq!(body["items"][0]["categoryName"], "Lifestyle Accessories");
}

#[tokio::test]
async fn test_list_products_last_page_is_short() {
    let server = test_server();
    let response = server.get("/api/products?page=4&limit=5").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["hasNext"], false);
    assert_eq!(body["pagination"]["hasPrev"], true);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let server = test_server();
    let response = server.get("/api/products?search=MOUSE").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["items"][0]["name"], "Wireless Mouse");
}

#[tokio::test]
async fn test_search_beyond_last_page_returns_empty_items() {
    let server = test_server();
    let response = server.get("/api/products?search=mouse&page=9").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["totalCount"], 1);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_absurd_page_number_is_empty_not_error() {
    let server = test_server();
    let response = server
        .get("/api/products?page=18446744073709551615&limit=5")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["totalCount"], 17);
}

#[tokio::test]
async fn test_sort_products_by_price_descending() {
    let server = test_server();
    let response = server
        .get("/api/products?sortBy=price&sortOrder=desc&limit=3")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let prices: Vec<f64> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["price"].as_f64().unwrap())
        .collect();
    assert_eq!(prices, vec![350.00, 249.99, 199.50]);
}

// =============================================================================
// Product mutations
// =============================================================================

#[tokio::test]
async fn test_create_product_assigns_fresh_id_and_lands_first() {
    let server = test_server();
    let token = admin_token(&server).await;
    let response = server
        .post("/api/products")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Collapsible Daypack",
            "categoryId": 2,
            "price": 39.90,
            "stock": 25,
            "sold": 0,
            "isFeatured": false
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let created: Value = response.json();
    assert_eq!(created["id"], 18);

    let list: Value = server.get("/api/products").await.json();
    assert_eq!(list["totalCount"], 18);
    assert_eq!(list["items"][0]["name"], "Collapsible Daypack");
}

#[tokio::test]
async fn test_create_product_rejects_negative_price() {
    let server = test_server();
    let token = admin_token(&server).await;
    let response = server
        .post("/api/products")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Bad Product",
            "categoryId": 2,
            "price": -1.0,
            "stock": 1,
            "sold": 0,
            "isFeatured": false
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_toggle_featured_round_trip() {
    let server = test_server();
    let token = admin_token(&server).await;

    // Product 2 starts out not featured.
    let toggled: Value = server
        .patch("/api/products/2/featured")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(toggled["isFeatured"], true);

    let toggled_back: Value = server
        .patch("/api/products/2/featured")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(toggled_back["isFeatured"], false);
}

#[tokio::test]
async fn test_update_missing_product_is_404() {
    let server = test_server();
    let token = admin_token(&server).await;
    let response = server
        .put("/api/products/999")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Ghost",
            "categoryId": 2,
            "price": 1.0,
            "stock": 1,
            "sold": 0,
            "isFeatured": false
        }))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_mutation_without_token_is_rejected() {
    let server = test_server();
    let response = server
        .post("/api/products")
        .json(&json!({
            "name": "No Credentials",
            "categoryId": 2,
            "price": 1.0,
            "stock": 1,
            "sold": 0,
            "isFeatured": false
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    // Nothing was created.
    let list: Value = server.get("/api/products").await.json();
    assert_eq!(list["totalCount"], 17);
}

#[tokio::test]
async fn test_reads_stay_open_without_token() {
    let server = test_server();
    server.get("/api/products").await.assert_status_ok();
    server.get("/api/categories").await.assert_status_ok();
    server.get("/api/dashboard/stats").await.assert_status_ok();
}

// =============================================================================
// Categories and the referential guard
// =============================================================================

#[tokio::test]
async fn test_list_categories_includes_product_counts() {
    let server = test_server();
    let response = server.get("/api/categories").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 8);

    let lifestyle = categories
        .iter()
        .find(|c| c["name"] == "Lifestyle Accessories")
        .unwrap();
    assert_eq!(lifestyle["productCount"], 6);
}

#[tokio::test]
async fn test_delete_category_in_use_is_conflict() {
    let server = test_server();
    let token = admin_token(&server).await;
    let response = server
        .delete("/api/categories/2")
        .authorization_bearer(&token)
        .await;
    response.assert_status(axum::http::StatusCode::CONFLICT);

    let body: Value = response.json();
    assert_eq!(body["code"], "CONFLICT");

    // Nothing was deleted.
    let list: Value = server.get("/api/categories").await.json();
    assert_eq!(list.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_delete_unused_category_succeeds() {
    let server = test_server();
    let token = admin_token(&server).await;
    let created = server
        .post("/api/categories")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Seasonal",
            "description": "Short-lived promotions.",
            "imageUrl": "https://picsum.photos/id/120/400/300"
        }))
        .await;
    created.assert_status(axum::http::StatusCode::CREATED);
    let category: Value = created.json();
    assert_eq!(category["id"], 9);

    let response = server
        .delete("/api/categories/9")
        .authorization_bearer(&token)
        .await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn test_search_orders_by_order_number() {
    let server = test_server();
    let response = server.get("/api/orders?search=ord-10008").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["items"][0]["id"], "ORD-10008");
}

#[tokio::test]
async fn test_update_order_status_changes_nothing_else() {
    let server = test_server();
    let token = admin_token(&server).await;
    let before: Value = server.get("/api/orders/ORD-10001").await.json();

    let response = server
        .patch("/api/orders/ORD-10001/status")
        .authorization_bearer(&token)
        .json(&json!({ "status": "Shipped" }))
        .await;
    response.assert_status_ok();

    let after: Value = response.json();
    assert_eq!(after["status"], "Shipped");
    assert_eq!(after["customerName"], before["customerName"]);
    assert_eq!(after["totalAmount"], before["totalAmount"]);
}

#[tokio::test]
async fn test_create_order_computes_total() {
    let server = test_server();
    let token = admin_token(&server).await;
    let response = server
        .post("/api/orders")
        .authorization_bearer(&token)
        .json(&json!({
            "customerName": "Test Buyer",
            "customerEmail": "buyer@example.com",
            "items": [
                { "productId": 1, "productName": "Wireless Mouse", "quantity": 2, "price": 25.99 },
                { "productId": 5, "productName": "Local Artisan Coffee", "quantity": 1, "price": 12.00 }
            ]
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let order: Value = response.json();
    assert_eq!(order["id"], "ORD-10016");
    assert_eq!(order["status"], "Pending");
    assert!((order["totalAmount"].as_f64().unwrap() - 63.98).abs() < 1e-9);
}

// =============================================================================
// Offers, banners, content
// =============================================================================

#[tokio::test]
async fn test_offers_come_back_newest_first() {
    let server = test_server();
    let body: Value = server.get("/api/offers").await.json();
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_replace_content_rejects_unknown_keys() {
    let server = test_server();
    let token = admin_token(&server).await;
    let response = server
        .put("/api/website/content")
        .authorization_bearer(&token)
        .json(&json!([
            { "key": "notARealSlot", "label": "Nope", "value": "x" }
        ]))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_replace_content_updates_known_keys() {
    let server = test_server();
    let token = admin_token(&server).await;
    let blocks: Value = server.get("/api/website/content").await.json();
    let mut first = blocks.as_array().unwrap()[0].clone();
    first["value"] = json!("Updated headline");

    let response = server
        .put("/api/website/content")
        .authorization_bearer(&token)
        .json(&json!([first]))
        .await;
    response.assert_status_ok();

    let after: Value = server.get("/api/website/content").await.json();
    assert_eq!(after.as_array().unwrap()[0]["value"], "Updated headline");
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn test_login_then_fetch_current_user() {
    let server = test_server();
    let login = server
        .post("/api/auth/login")
        .json(&json!({ "email": "admin@example.com", "password": "password" }))
        .await;
    login.assert_status_ok();

    let body: Value = login.json();
    let token = body["token"].as_str().unwrap().to_string();
    assert_eq!(body["user"]["name"], "Marcus Robb");

    let me = server
        .get("/api/auth/me")
        .authorization_bearer(&token)
        .await;
    me.assert_status_ok();
    let me_body: Value = me.json();
    assert_eq!(me_body["email"], "admin@example.com");
}

#[tokio::test]
async fn test_me_without_token_is_rejected() {
    let server = test_server();
    let response = server.get("/api/auth/me").await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_profile_with_admin_token() {
    let server = test_server();
    let token = admin_token(&server).await;

    let response = server
        .patch("/api/users/1")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Marcus R.", "email": "admin@example.com" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["name"], "Marcus R.");
    assert_eq!(body["role"], "Admin");
}

// =============================================================================
// Reports
// =============================================================================

#[tokio::test]
async fn test_dashboard_stats_reflect_live_mutations() {
    let server = test_server();
    let token = admin_token(&server).await;
    let before: Value = server.get("/api/dashboard/stats").await.json();
    assert_eq!(before["totalProducts"], 17);
    assert_eq!(before["totalOrders"], 15);
    assert_eq!(before["totalCategories"], 8);

    server
        .delete("/api/products/1")
        .authorization_bearer(&token)
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    let after: Value = server.get("/api/dashboard/stats").await.json();
    assert_eq!(after["totalProducts"], 16);
}

#[tokio::test]
async fn test_category_distribution_buckets_every_product() {
    let server = test_server();
    let body: Value = server.get("/api/reports/category-distribution").await.json();
    let total: u64 = body
        .as_array()
        .unwrap()
        .iter()
        .map(|slice| slice["value"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 17);
}

#[tokio::test]
async fn test_top_sellers_honors_limit() {
    let server = test_server();
    let body: Value = server.get("/api/reports/top-sellers?limit=2").await.json();
    let top = body.as_array().unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0]["name"], "Linen Shirt");
    assert_eq!(top[0]["value"], 250);

    let default: Value = server.get("/api/reports/top-sellers").await.json();
    assert_eq!(default.as_array().unwrap().len(), 5);
}
